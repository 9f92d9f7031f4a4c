//! Spans between two instants, and the clock used to fill in a missing end.
//!
//! The formatter itself never reads a clock: a span whose end is absent or
//! zero is resolved against a `now` the caller passes in.

use crate::duration::{format_duration, FormatMode};
use crate::input::TotalMillis;
use serde::{Deserialize, Serialize};

/// Two instants in milliseconds since the Unix epoch.
///
/// An `end` of `None` or `Some(0)` means "until now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start_ms: i64,
    #[serde(default)]
    pub end_ms: Option<i64>,
}

impl TimeSpan {
    pub fn new(start_ms: i64, end_ms: Option<i64>) -> Self {
        TimeSpan { start_ms, end_ms }
    }

    /// Span from `start_ms` until whatever instant it is resolved at.
    pub fn since(start_ms: i64) -> Self {
        TimeSpan::new(start_ms, None)
    }

    /// Whether the end bound depends on the current instant.
    pub fn is_open(&self) -> bool {
        matches!(self.end_ms, None | Some(0))
    }

    /// Fixes the end bound, substituting `now_ms` if it is absent or zero.
    pub fn resolve(&self, now_ms: i64) -> ResolvedSpan {
        let end_ms = match self.end_ms {
            Some(end) if end != 0 => end,
            _ => now_ms,
        };
        ResolvedSpan {
            start_ms: self.start_ms,
            end_ms,
        }
    }
}

/// A span with both bounds known. May be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedSpan {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TotalMillis for ResolvedSpan {
    #[inline]
    fn total_millis(&self) -> i128 {
        i128::from(self.end_ms) - i128::from(self.start_ms)
    }
}

/// Formats a span, resolving an open end against `now_ms`.
pub fn format_span(span: &TimeSpan, now_ms: i64, mode: FormatMode) -> String {
    format_duration(&span.resolve(now_ms), mode)
}

/// Source of the current instant.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock stuck at one instant, for tests and reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}
