//! Extraction error types

use std::num::ParseIntError;

use thiserror::Error;

use crate::records::RecordStreamError;

/// Result type for whole-stream extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Failure that stops extraction before any row is looked at
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The record parser produced no rows at all
    #[error("failed to parse records: {0}")]
    Parse(#[from] RecordStreamError),
}

/// Why a single record could not become an event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordErrorKind {
    /// The record does not have exactly six fields
    #[error("non matching {fields:?}, len was {len}")]
    FieldCount { fields: Vec<String>, len: usize },

    /// A start or end field is not a base-10 i64
    #[error("invalid {field} time {value:?}: {source}")]
    InvalidTime {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
}

/// A record that was skipped, tagged with its zero-based row index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {row}: {kind}")]
pub struct RecordError {
    /// Zero-based index of the row in the record stream
    pub row: usize,
    /// What was wrong with the row
    pub kind: RecordErrorKind,
}

impl RecordError {
    /// Tag a record failure with its row index
    pub fn new(row: usize, kind: RecordErrorKind) -> Self {
        Self { row, kind }
    }
}
