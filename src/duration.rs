//! The duration formatter.
//!
//! A duration is reduced to its absolute length in milliseconds, split into
//! years, days, hours and minutes, and rendered either narrow (`1d 2h 5m`) or
//! long (`1 day 2 hours 5 minutes`). Anything under a minute collapses to a
//! fixed "less than one minute" text. Leftover seconds are truncated.

use crate::input::TotalMillis;
use crate::units::{self, Unit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output vocabulary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    /// Suffix codes: `1d 2h 5m`.
    #[default]
    Narrow,
    /// Full, pluralized words: `1 day 2 hours 5 minutes`.
    Long,
}

impl FormatMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            FormatMode::Narrow => "narrow",
            FormatMode::Long => "long",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A duration split into its output units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBreakdown {
    /// The span was shorter than one minute.
    LessThanOneMinute,
    /// Whole units; seconds and below have been dropped.
    Units {
        years: u128,
        days: u128,
        hours: u128,
        minutes: u128,
    },
}

impl DurationBreakdown {
    /// Splits an absolute length in milliseconds into output units.
    pub fn from_millis(total_ms: u128) -> Self {
        if total_ms < Unit::Minute.millis() {
            return DurationBreakdown::LessThanOneMinute;
        }

        let mut rest = total_ms;
        let mut take = |unit: Unit| {
            let value = rest / unit.millis();
            rest %= unit.millis();
            value
        };

        DurationBreakdown::Units {
            years: take(Unit::Year),
            days: take(Unit::Day),
            hours: take(Unit::Hour),
            minutes: take(Unit::Minute),
        }
    }

    /// Breaks down any supported duration representation.
    pub fn of<D: TotalMillis + ?Sized>(duration: &D) -> Self {
        Self::from_millis(duration.total_millis().unsigned_abs())
    }

    /// Value of one unit, or `None` for the sub-minute sentinel.
    pub fn get(&self, unit: Unit) -> Option<u128> {
        match *self {
            DurationBreakdown::LessThanOneMinute => None,
            DurationBreakdown::Units {
                years,
                days,
                hours,
                minutes,
            } => Some(match unit {
                Unit::Year => years,
                Unit::Day => days,
                Unit::Hour => hours,
                Unit::Minute => minutes,
            }),
        }
    }

    /// Units with a non-zero value, most significant first.
    pub fn non_zero(&self) -> impl Iterator<Item = (Unit, u128)> + '_ {
        Unit::ALL
            .into_iter()
            .filter_map(|unit| self.get(unit).filter(|v| *v > 0).map(|v| (unit, v)))
    }

    /// Renders the breakdown in the given mode.
    pub fn render(&self, mode: FormatMode) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(mode, &mut out);
        out
    }

    /// Writes the breakdown in the given mode, units separated by single spaces.
    pub fn write_to<W: fmt::Write>(&self, mode: FormatMode, out: &mut W) -> fmt::Result {
        if *self == DurationBreakdown::LessThanOneMinute {
            return out.write_str(units::less_than_one_minute(mode));
        }
        for (i, (unit, value)) in self.non_zero().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            units::rendering(unit, mode).write_to(value, out)?;
        }
        Ok(())
    }
}

/// Formats a duration as a narrow or long human-readable string.
///
/// Accepts any representation implementing [`TotalMillis`]; equivalent
/// magnitudes always format identically. The sign is ignored.
///
/// ```
/// use formatted_duration::{format_duration, DurationUnits, FormatMode};
///
/// let d = DurationUnits::new().days(1).hours(2).minutes(5);
/// assert_eq!(format_duration(&d, FormatMode::Narrow), "1d 2h 5m");
/// assert_eq!(format_duration(&d, FormatMode::Long), "1 day 2 hours 5 minutes");
/// ```
pub fn format_duration<D: TotalMillis + ?Sized>(duration: &D, mode: FormatMode) -> String {
    DurationBreakdown::of(duration).render(mode)
}

/// `Display` adaptor around [`format_duration`].
pub struct Formatted<'a, D: TotalMillis + ?Sized> {
    duration: &'a D,
    mode: FormatMode,
}

impl<'a, D: TotalMillis + ?Sized> Formatted<'a, D> {
    pub fn new(duration: &'a D, mode: FormatMode) -> Self {
        Formatted { duration, mode }
    }
}

impl<D: TotalMillis + ?Sized> fmt::Display for Formatted<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DurationBreakdown::of(self.duration).write_to(self.mode, f)
    }
}
