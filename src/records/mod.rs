//! CSV record stream
//!
//! Reading turns raw CSV text into rows of string fields for the extractor;
//! writing produces the same format from extracted or merged events.
//!
//! # Format
//!
//! ```text
//! metric,type,start_time,end_time,value,opt
//! screen,on,100,200,,
//! wakelock,held,120,180,com.example.mail,
//! ```

mod reader;
mod writer;

use thiserror::Error;

pub use reader::{parse_records, read_records};
pub use writer::write_events;

/// Header row that starts every events CSV
pub const FILE_HEADER: &str = "metric,type,start_time,end_time,value,opt";

/// Number of fields in every event record
pub const RECORD_FIELDS: usize = 6;

/// One parsed row: an ordered sequence of fields
pub type Record = Vec<String>;

/// Result type for record stream operations
pub type RecordResult<T> = Result<T, RecordStreamError>;

/// Failures that stop a whole record stream from being read or written
#[derive(Debug, Error)]
pub enum RecordStreamError {
    /// The text is not valid CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The underlying reader or writer failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
