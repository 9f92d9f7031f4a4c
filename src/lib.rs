// Module declarations for the library crate.

pub mod cli;
pub mod config;
pub mod duration;
pub mod input;
pub mod live;
pub mod report;
pub mod span;
pub mod telemetry;
pub mod units;
pub mod util;

// Re-export the formatting API for convenience.
pub use duration::{format_duration, DurationBreakdown, FormatMode, Formatted};
pub use input::{DurationUnits, ParseUnitsError, TotalMillis};
pub use live::LiveDuration;
pub use span::{format_span, Clock, FixedClock, ResolvedSpan, SystemClock, TimeSpan};
