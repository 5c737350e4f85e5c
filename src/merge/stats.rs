//! Summary numbers for a metric's merged intervals

use serde::Serialize;

use crate::types::Event;

/// Coverage statistics for one metric's merged intervals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalStats {
    /// Number of intervals
    pub intervals: usize,
    /// Sum of interval lengths in milliseconds
    pub covered_ms: i64,
    /// Earliest start, if there is any interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_start: Option<i64>,
    /// Latest end, if there is any interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_end: Option<i64>,
}

impl IntervalStats {
    /// Compute statistics over a set of intervals
    ///
    /// Meant for the output of `merge_events`; over overlapping input the
    /// covered time counts shared stretches more than once.
    pub fn from_intervals(intervals: &[Event]) -> Self {
        Self {
            intervals: intervals.len(),
            covered_ms: intervals
                .iter()
                .fold(0i64, |acc, e| acc.saturating_add(e.duration_ms())),
            first_start: intervals.iter().map(|e| e.start).min(),
            last_end: intervals.iter().map(|e| e.end).max(),
        }
    }

    /// Time from the first start to the last end
    pub fn span_ms(&self) -> i64 {
        match (self.first_start, self.last_end) {
            (Some(start), Some(end)) => end.saturating_sub(start),
            _ => 0,
        }
    }

    /// Fraction of the span covered by intervals, in `[0, 1]` for well-formed input
    pub fn coverage_ratio(&self) -> f64 {
        let span = self.span_ms();
        if span <= 0 {
            return 0.0;
        }
        self.covered_ms as f64 / span as f64
    }
}
