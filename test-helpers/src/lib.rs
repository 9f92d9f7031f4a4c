//! Common helper functions for tests and benchmarks.
use chrono::{NaiveDateTime, TimeZone, Utc};
use formatted_duration::{DurationUnits, FormatMode, TimeSpan};

// --- Constants ---
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;

/// The instant the reference tests treat as "now": 2017-02-08 12:00 UTC.
pub const MOCK_NOW_MS: i64 = 1_486_555_200_000;

pub const MODES: [FormatMode; 2] = [FormatMode::Narrow, FormatMode::Long];

// --- Instant Helpers ---

/// Parses `"YYYY-MM-DD HH:MM[:SS]"` as a UTC instant in epoch milliseconds.
pub fn at(s: &str) -> i64 {
    let parsed = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .unwrap_or_else(|e| panic!("bad test timestamp '{s}': {e}"));
    Utc.from_utc_datetime(&parsed).timestamp_millis()
}

/// Span between two `at()` timestamps.
pub fn span(from: &str, to: &str) -> TimeSpan {
    TimeSpan::new(at(from), Some(at(to)))
}

// --- Duration Helpers ---

/// Builds a `DurationUnits` from (years, weeks, days, hours, minutes, seconds).
pub fn units(y: i64, w: i64, d: i64, h: i64, m: i64, s: i64) -> DurationUnits {
    DurationUnits::new()
        .years(y)
        .weeks(w)
        .days(d)
        .hours(h)
        .minutes(m)
        .seconds(s)
}

/// Milliseconds equivalent of `units()`, computed independently of the crate.
pub fn units_ms(y: i64, w: i64, d: i64, h: i64, m: i64, s: i64) -> i64 {
    y * MS_PER_YEAR + w * 7 * MS_PER_DAY + d * MS_PER_DAY + h * MS_PER_HOUR + m * MS_PER_MINUTE
        + s * 1_000
}
