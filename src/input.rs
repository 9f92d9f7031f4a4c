//! Duration representations accepted by the formatter.
//!
//! Every representation reduces to a signed total in milliseconds through
//! [`TotalMillis`]; the formatter never looks at which type carried it.

use crate::units::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, MS_PER_WEEK, MS_PER_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Anything that can be reduced to a signed length in milliseconds.
pub trait TotalMillis {
    fn total_millis(&self) -> i128;
}

impl<T: TotalMillis + ?Sized> TotalMillis for &T {
    #[inline]
    fn total_millis(&self) -> i128 {
        (**self).total_millis()
    }
}

/// A bare millisecond count.
impl TotalMillis for i64 {
    #[inline]
    fn total_millis(&self) -> i128 {
        i128::from(*self)
    }
}

impl TotalMillis for Duration {
    #[inline]
    fn total_millis(&self) -> i128 {
        // as_millis() truncates sub-millisecond precision, which never shows anyway.
        self.as_millis() as i128
    }
}

impl TotalMillis for chrono::TimeDelta {
    #[inline]
    fn total_millis(&self) -> i128 {
        i128::from(self.num_milliseconds())
    }
}

/// A duration given as named calendar units. Unset fields are zero.
///
/// Weeks are seven days and years are 365 days; months are not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationUnits {
    pub years: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl DurationUnits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn years(mut self, n: i64) -> Self {
        self.years = n;
        self
    }

    pub fn weeks(mut self, n: i64) -> Self {
        self.weeks = n;
        self
    }

    pub fn days(mut self, n: i64) -> Self {
        self.days = n;
        self
    }

    pub fn hours(mut self, n: i64) -> Self {
        self.hours = n;
        self
    }

    pub fn minutes(mut self, n: i64) -> Self {
        self.minutes = n;
        self
    }

    pub fn seconds(mut self, n: i64) -> Self {
        self.seconds = n;
        self
    }

    pub fn milliseconds(mut self, n: i64) -> Self {
        self.milliseconds = n;
        self
    }
}

impl TotalMillis for DurationUnits {
    fn total_millis(&self) -> i128 {
        // i64 * largest unit stays far inside i128.
        i128::from(self.years) * MS_PER_YEAR
            + i128::from(self.weeks) * MS_PER_WEEK
            + i128::from(self.days) * MS_PER_DAY
            + i128::from(self.hours) * MS_PER_HOUR
            + i128::from(self.minutes) * MS_PER_MINUTE
            + i128::from(self.seconds) * MS_PER_SECOND
            + i128::from(self.milliseconds)
    }
}

/// Error parsing the compact unit text form (`"2y 6d 12m"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseUnitsError {
    Empty,
    MissingNumber(String),
    InvalidNumber(String),
    UnknownUnit(String),
    DuplicateUnit(String),
}

impl fmt::Display for ParseUnitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseUnitsError::Empty => write!(f, "empty duration"),
            ParseUnitsError::MissingNumber(tok) => write!(f, "missing number in '{tok}'"),
            ParseUnitsError::InvalidNumber(tok) => write!(f, "invalid number in '{tok}'"),
            ParseUnitsError::UnknownUnit(tok) => {
                write!(f, "unknown unit in '{tok}' (expected y, w, d, h, m, s or ms)")
            }
            ParseUnitsError::DuplicateUnit(tok) => write!(f, "unit given twice: '{tok}'"),
        }
    }
}

impl std::error::Error for ParseUnitsError {}

impl FromStr for DurationUnits {
    type Err = ParseUnitsError;

    /// Parses whitespace-separated `<integer><unit>` tokens, units being
    /// `y w d h m s ms`. A leading `-` on a token negates that token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut units = DurationUnits::default();
        let mut seen: Vec<&str> = Vec::new();

        for token in s.split_whitespace() {
            let split = token
                .char_indices()
                .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
                .map(|(i, _)| i)
                .unwrap_or(token.len());
            let (number, unit) = token.split_at(split);
            if number.is_empty() || number == "-" || number == "+" {
                return Err(ParseUnitsError::MissingNumber(token.to_string()));
            }
            let value: i64 = number
                .parse()
                .map_err(|_| ParseUnitsError::InvalidNumber(token.to_string()))?;

            let slot = match unit {
                "y" => &mut units.years,
                "w" => &mut units.weeks,
                "d" => &mut units.days,
                "h" => &mut units.hours,
                "m" => &mut units.minutes,
                "s" => &mut units.seconds,
                "ms" => &mut units.milliseconds,
                _ => return Err(ParseUnitsError::UnknownUnit(token.to_string())),
            };
            if seen.contains(&unit) {
                return Err(ParseUnitsError::DuplicateUnit(token.to_string()));
            }
            seen.push(unit);
            *slot = value;
        }

        if seen.is_empty() {
            return Err(ParseUnitsError::Empty);
        }
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_sum_to_millis() {
        let d = DurationUnits::new().weeks(2).days(6).minutes(12);
        assert_eq!(d.total_millis(), 20 * MS_PER_DAY + 12 * MS_PER_MINUTE);
    }

    #[test]
    fn representations_agree() {
        let units = DurationUnits::new().days(1).hours(2).minutes(5);
        let ms: i64 = 26 * 3_600_000 + 5 * 60_000;
        let std = Duration::from_millis(ms as u64);
        let delta = chrono::TimeDelta::milliseconds(ms);
        assert_eq!(units.total_millis(), ms.total_millis());
        assert_eq!(std.total_millis(), ms.total_millis());
        assert_eq!(delta.total_millis(), ms.total_millis());
    }

    #[test]
    fn extreme_fields_do_not_overflow() {
        let d = DurationUnits::new().years(i64::MAX).weeks(i64::MAX).days(i64::MAX);
        assert!(d.total_millis() > 0);
        let d = DurationUnits::new().years(i64::MIN);
        assert!(d.total_millis() < 0);
    }

    #[test]
    fn parses_compact_text() {
        let d: DurationUnits = "2y 6d 12m".parse().unwrap();
        assert_eq!(d, DurationUnits::new().years(2).days(6).minutes(12));

        let d: DurationUnits = "6w".parse().unwrap();
        assert_eq!(d.weeks, 6);

        let d: DurationUnits = "1m 30s 250ms".parse().unwrap();
        assert_eq!(d, DurationUnits::new().minutes(1).seconds(30).milliseconds(250));

        let d: DurationUnits = "-3h".parse().unwrap();
        assert_eq!(d.hours, -3);
    }

    #[test]
    fn rejects_bad_text() {
        assert_eq!("".parse::<DurationUnits>(), Err(ParseUnitsError::Empty));
        assert_eq!(
            "d".parse::<DurationUnits>(),
            Err(ParseUnitsError::MissingNumber("d".into()))
        );
        assert_eq!(
            "5x".parse::<DurationUnits>(),
            Err(ParseUnitsError::UnknownUnit("5x".into()))
        );
        assert_eq!(
            "5".parse::<DurationUnits>(),
            Err(ParseUnitsError::UnknownUnit("5".into()))
        );
        assert_eq!(
            "1d 2d".parse::<DurationUnits>(),
            Err(ParseUnitsError::DuplicateUnit("2d".into()))
        );
        assert!(matches!(
            "99999999999999999999d".parse::<DurationUnits>(),
            Err(ParseUnitsError::InvalidNumber(_))
        ));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let d: DurationUnits = serde_json::from_str(r#"{"hours": 1, "minutes": 30}"#).unwrap();
        assert_eq!(d, DurationUnits::new().hours(1).minutes(30));
    }
}
