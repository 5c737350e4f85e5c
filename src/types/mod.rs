//! Data types shared by extraction and merging

mod event;

use std::collections::BTreeMap;

pub use event::Event;

/// Events grouped by metric name, each vector in source row order
///
/// Keyed in name order so every rendering of a map is deterministic.
pub type EventMap = BTreeMap<String, Vec<Event>>;
