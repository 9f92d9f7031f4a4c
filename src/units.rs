//! Output units and the table of how each one is rendered per format mode.

use crate::duration::FormatMode;
use std::fmt;

pub const MS_PER_SECOND: i128 = 1_000;
pub const MS_PER_MINUTE: i128 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i128 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i128 = 24 * MS_PER_HOUR;
pub const MS_PER_WEEK: i128 = 7 * MS_PER_DAY;
/// A year is always 365 days here; leap days are not accounted for.
pub const MS_PER_YEAR: i128 = 365 * MS_PER_DAY;

/// A unit that can appear in a formatted duration, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Day,
    Hour,
    Minute,
}

impl Unit {
    /// Every output unit, most significant first.
    pub const ALL: [Unit; 4] = [Unit::Year, Unit::Day, Unit::Hour, Unit::Minute];

    /// Length of one unit in milliseconds.
    #[inline]
    pub const fn millis(self) -> u128 {
        match self {
            Unit::Year => MS_PER_YEAR as u128,
            Unit::Day => MS_PER_DAY as u128,
            Unit::Hour => MS_PER_HOUR as u128,
            Unit::Minute => MS_PER_MINUTE as u128,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
        }
    }
}

/// How a unit's value is attached to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// Label concatenated directly to the number: `5m`.
    Suffix(&'static str),
    /// Space-separated word, pluralized unless the value is exactly one: `5 minutes`.
    Word {
        singular: &'static str,
        plural: &'static str,
    },
}

impl Rendering {
    /// Renders `value` according to this rule.
    pub fn apply(self, value: u128) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(value, &mut out);
        out
    }

    /// Writes `value` according to this rule.
    pub fn write_to<W: fmt::Write>(self, value: u128, out: &mut W) -> fmt::Result {
        match self {
            Rendering::Suffix(suffix) => write!(out, "{value}{suffix}"),
            Rendering::Word { singular, plural } => {
                let word = if value == 1 { singular } else { plural };
                write!(out, "{value} {word}")
            }
        }
    }
}

// Keyed by "<unit>:<mode>".
static RENDERINGS: phf::Map<&'static str, Rendering> = phf::phf_map! {
    "year:narrow" => Rendering::Suffix("y"),
    "day:narrow" => Rendering::Suffix("d"),
    "hour:narrow" => Rendering::Suffix("h"),
    "minute:narrow" => Rendering::Suffix("m"),
    "year:long" => Rendering::Word { singular: "year", plural: "years" },
    "day:long" => Rendering::Word { singular: "day", plural: "days" },
    "hour:long" => Rendering::Word { singular: "hour", plural: "hours" },
    "minute:long" => Rendering::Word { singular: "minute", plural: "minutes" },
};

/// Table key for a (unit, mode) pair.
pub const fn rendering_key(unit: Unit, mode: FormatMode) -> &'static str {
    match (unit, mode) {
        (Unit::Year, FormatMode::Narrow) => "year:narrow",
        (Unit::Day, FormatMode::Narrow) => "day:narrow",
        (Unit::Hour, FormatMode::Narrow) => "hour:narrow",
        (Unit::Minute, FormatMode::Narrow) => "minute:narrow",
        (Unit::Year, FormatMode::Long) => "year:long",
        (Unit::Day, FormatMode::Long) => "day:long",
        (Unit::Hour, FormatMode::Long) => "hour:long",
        (Unit::Minute, FormatMode::Long) => "minute:long",
    }
}

/// Looks up the rendering rule for a unit in the given mode.
///
/// Every (unit, mode) pair has an entry in the table.
pub fn rendering(unit: Unit, mode: FormatMode) -> Rendering {
    RENDERINGS[rendering_key(unit, mode)]
}

/// Text shown for any span shorter than one minute.
pub const fn less_than_one_minute(mode: FormatMode) -> &'static str {
    match mode {
        FormatMode::Narrow => "< 1m",
        FormatMode::Long => "less than 1 minute",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_has_a_rule_in_every_mode() {
        for unit in Unit::ALL {
            for mode in [FormatMode::Narrow, FormatMode::Long] {
                let key = rendering_key(unit, mode);
                assert!(RENDERINGS.contains_key(key), "missing {key}");
            }
        }
    }

    #[test]
    fn long_mode_never_uses_suffixes() {
        for unit in Unit::ALL {
            assert!(matches!(
                rendering(unit, FormatMode::Long),
                Rendering::Word { .. }
            ));
            assert!(matches!(
                rendering(unit, FormatMode::Narrow),
                Rendering::Suffix(_)
            ));
        }
    }

    #[test]
    fn keys_are_distinct() {
        let mut keys: Vec<_> = Unit::ALL
            .into_iter()
            .flat_map(|u| [FormatMode::Narrow, FormatMode::Long].map(|m| rendering_key(u, m)))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), RENDERINGS.len());
    }

    #[test]
    fn units_are_descending() {
        for pair in Unit::ALL.windows(2) {
            assert!(pair[0].millis() > pair[1].millis());
        }
    }

    #[test]
    fn word_rule_pluralizes() {
        let rule = rendering(Unit::Hour, FormatMode::Long);
        assert_eq!(rule.apply(1), "1 hour");
        assert_eq!(rule.apply(0), "0 hours");
        assert_eq!(rule.apply(2), "2 hours");
    }

    #[test]
    fn suffix_rule_concatenates() {
        assert_eq!(rendering(Unit::Year, FormatMode::Narrow).apply(99), "99y");
        assert_eq!(rendering(Unit::Minute, FormatMode::Narrow).apply(1), "1m");
    }

    #[test]
    fn year_is_365_days() {
        assert_eq!(Unit::Year.millis(), 365 * Unit::Day.millis());
        assert_eq!(MS_PER_WEEK, 7 * MS_PER_DAY);
    }
}
