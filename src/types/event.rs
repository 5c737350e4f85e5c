//! Event type for metric timelines
//!
//! An `Event` is one timestamped occurrence of a metric, as read from a
//! single CSV record. Times are milliseconds.

use serde::{Deserialize, Serialize};

/// A single time-bounded occurrence of a metric
///
/// Events built by extraction carry every field of their source record.
/// Coalesced spans built by merging carry only `start` and `end`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Sub-kind of the event (e.g. a state name)
    #[serde(rename = "type")]
    pub event_type: String,

    /// Start time in milliseconds
    pub start: i64,

    /// End time in milliseconds
    pub end: i64,

    /// Free-form payload
    pub value: String,

    /// Free-form secondary payload
    pub opt: String,

    /// Package name, filled in by callers from package metadata
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub app_name: String,
}

impl Event {
    /// Create an event from its record fields
    pub fn new(
        event_type: impl Into<String>,
        start: i64,
        end: i64,
        value: impl Into<String>,
        opt: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            start,
            end,
            value: value.into(),
            opt: opt.into(),
            app_name: String::new(),
        }
    }

    /// Create a metadata-free span covering `[start, end]`
    pub fn span(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Attach the package name of the app responsible for this event
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Length of the event in milliseconds (negative when `start > end`)
    pub fn duration_ms(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `start <= end`
    ///
    /// Nothing in extraction or merging rejects inverted events; this lets a
    /// caller filter them out first when interval lengths matter.
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Whether this event carries no metadata besides its time span
    pub fn is_bare_span(&self) -> bool {
        self.event_type.is_empty()
            && self.value.is_empty()
            && self.opt.is_empty()
            && self.app_name.is_empty()
    }
}
