//! Utility functions shared across modules.

use chrono::DateTime;
use std::time::Duration;

/// Formats a `std::time::Duration` into a human-readable string using `humantime`.
#[inline]
pub fn format_interval(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

/// Parses an instant given either as integer milliseconds since the Unix
/// epoch or as an RFC 3339 timestamp.
pub fn parse_timestamp_ms(s: &str) -> Result<i64, String> {
    let s = s.trim();
    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| format!("'{s}' is neither epoch milliseconds nor RFC 3339: {e}"))
}
