//! Utility functions and helpers
//!
//! This module contains timestamp formatting helpers.

pub mod time;

pub use time::{format_duration_ms, format_millis, millis_to_datetime};
