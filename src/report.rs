//! Machine-readable output: both renderings plus the unit breakdown.

use crate::duration::{format_duration, DurationBreakdown, FormatMode};
use crate::input::TotalMillis;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct Report {
    pub narrow: String,
    pub long: String,
    /// Signed length as given; the renderings use its absolute value.
    pub total_ms: i128,
    pub breakdown: DurationBreakdown,
}

impl Report {
    pub fn new<D: TotalMillis + ?Sized>(duration: &D) -> Self {
        Report {
            narrow: format_duration(duration, FormatMode::Narrow),
            long: format_duration(duration, FormatMode::Long),
            total_ms: duration.total_millis(),
            breakdown: DurationBreakdown::of(duration),
        }
    }

    /// Writes the report as a single line of JSON.
    pub fn write_json(&self, mut writer: impl Write) -> std::io::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writeln!(writer)
    }
}
