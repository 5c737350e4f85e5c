//! Metric Events
//!
//! Turns a flat CSV record stream into typed, time-bounded events grouped by
//! metric name, and collapses each metric's overlapping events into the
//! minimal set of disjoint intervals.
//!
//! # Modules
//!
//! - `types`: `Event` and the per-metric `EventMap`
//! - `records`: CSV record parsing and writing
//! - `extract`: Event Extractor (rows to per-metric events plus per-row errors)
//! - `merge`: Interval Merger (events to disjoint intervals) and statistics
//! - `utils`: Timestamp formatting
//! - `cli`, `logging`: the `metric-events` binary's front end
//!
//! # Example
//!
//! ```
//! use metric_events::{extract_events_from_csv, merge_events};
//!
//! let csv = "metric,type,start_time,end_time,value,opt\n\
//!            screen,on,100,200,,\n\
//!            screen,on,150,300,,\n";
//!
//! let mut extraction = extract_events_from_csv(csv, None).unwrap();
//! assert!(extraction.is_clean());
//!
//! let screen = extraction.events.get_mut("screen").unwrap();
//! assert_eq!(screen.len(), 2);
//!
//! let merged = merge_events(screen);
//! assert_eq!((merged[0].start, merged[0].end), (100, 300));
//! ```

pub mod cli;
pub mod extract;
pub mod logging;
pub mod merge;
pub mod records;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use extract::{
    event_from_record, extract_events, extract_events_from_csv, ExtractConfig, ExtractError,
    Extraction, Extractor, RecordError, RecordErrorKind,
};
pub use merge::{merge_all, merge_events, merge_events_cloned, IntervalStats};
pub use records::{parse_records, read_records, write_events, FILE_HEADER};
pub use types::{Event, EventMap};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
