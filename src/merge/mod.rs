//! Interval Merger
//!
//! Collapses one metric's events into the minimal set of disjoint intervals.
//!
//! # Algorithm
//!
//! ```text
//! sort by start ──► prev = first ──► for cur in rest:
//!                                      prev.end <  cur.start  → emit prev, prev = cur
//!                                      prev.end >= cur.start  → prev = [prev.start, max(prev.end, cur.end)]
//!                                    emit prev
//! ```
//!
//! Touching intervals (`prev.end == cur.start`) merge. A merged interval
//! keeps only its time span: type, value, opt and app name are dropped.
//! Events that never overlap anything come out unchanged.

mod stats;

use rayon::prelude::*;
use tracing::debug;

use crate::types::{Event, EventMap};

pub use stats::IntervalStats;

/// Merge overlapping events into disjoint intervals sorted by start
///
/// The slice is sorted in place by start time. The sort is stable, so
/// events with equal starts keep their input order. Use
/// [`merge_events_cloned`] to leave the caller's order untouched.
///
/// Events with `start > end` are not rejected; they take part in the
/// comparisons like any other event.
pub fn merge_events(events: &mut [Event]) -> Vec<Event> {
    events.sort_by_key(|e| e.start);

    let Some((first, rest)) = events.split_first() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut prev = first.clone();
    for cur in rest {
        if prev.end < cur.start {
            merged.push(std::mem::replace(&mut prev, cur.clone()));
        } else {
            prev = Event::span(prev.start, prev.end.max(cur.end));
        }
    }
    merged.push(prev);

    merged
}

/// Merge a copy of the events, leaving the input order as it was
pub fn merge_events_cloned(events: &[Event]) -> Vec<Event> {
    merge_events(&mut events.to_vec())
}

/// Merge every metric of an event map independently
///
/// Metrics are merged in parallel. Each metric's vector in `events` ends up
/// sorted by start; metrics with no events map to an empty vector.
pub fn merge_all(events: &mut EventMap) -> EventMap {
    let merged: EventMap = events
        .par_iter_mut()
        .map(|(metric, metric_events)| (metric.clone(), merge_events(metric_events)))
        .collect();

    debug!(
        metrics = merged.len(),
        intervals = merged.values().map(Vec::len).sum::<usize>(),
        "merged events"
    );
    merged
}
