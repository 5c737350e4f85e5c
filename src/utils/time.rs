//! Millisecond timestamp helpers

use chrono::{DateTime, SecondsFormat, Utc};

/// Convert milliseconds since the Unix epoch to a UTC datetime
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn millis_to_datetime(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ms)
}

/// Render milliseconds since the Unix epoch as RFC 3339
///
/// Out-of-range values fall back to the raw number.
pub fn format_millis(ms: i64) -> String {
    match millis_to_datetime(ms) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => ms.to_string(),
    }
}

/// Render a duration in milliseconds as `1h 2m 3.456s`
pub fn format_duration_ms(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();

    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;

    if hours > 0 {
        format!("{}{}h {}m {}.{:03}s", sign, hours, minutes, seconds, millis)
    } else if minutes > 0 {
        format!("{}{}m {}.{:03}s", sign, minutes, seconds, millis)
    } else {
        format!("{}{}.{:03}s", sign, seconds, millis)
    }
}
