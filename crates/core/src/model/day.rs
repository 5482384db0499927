use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of days in the curriculum.
pub const TOTAL_DAYS: u8 = 90;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DayError {
    #[error("day {0} is outside 1..=90")]
    OutOfRange(i64),

    #[error("not a day number: {0:?}")]
    Unparsable(String),
}

/// A day of the 90-day challenge, always within `1..=90`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Day(u8);

impl Day {
    pub const FIRST: Day = Day(1);
    pub const LAST: Day = Day(TOTAL_DAYS);

    /// Validates a raw day number.
    ///
    /// # Errors
    ///
    /// Returns `DayError::OutOfRange` if `raw` is not within `1..=90`.
    pub fn new(raw: i64) -> Result<Self, DayError> {
        match u8::try_from(raw) {
            Ok(value) if (1..=TOTAL_DAYS).contains(&value) => Ok(Self(value)),
            _ => Err(DayError::OutOfRange(raw)),
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn previous(self) -> Option<Day> {
        (self.0 > 1).then(|| Day(self.0 - 1))
    }

    #[must_use]
    pub fn next(self) -> Option<Day> {
        (self.0 < TOTAL_DAYS).then(|| Day(self.0 + 1))
    }

    /// Every day of the challenge in order.
    pub fn all() -> impl Iterator<Item = Day> {
        (1..=TOTAL_DAYS).map(Day)
    }

    /// Zero-based position, handy for indexing static tables.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl Default for Day {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for Day {
    type Error = DayError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Day::new(value)
    }
}

impl From<Day> for i64 {
    fn from(day: Day) -> Self {
        i64::from(day.0)
    }
}

impl FromStr for Day {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| DayError::Unparsable(s.to_string()))?;
        Day::new(raw)
    }
}

impl fmt::Debug for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day({})", self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Day::new(1).unwrap(), Day::FIRST);
        assert_eq!(Day::new(90).unwrap(), Day::LAST);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Day::new(0), Err(DayError::OutOfRange(0)));
        assert_eq!(Day::new(91), Err(DayError::OutOfRange(91)));
        assert_eq!(Day::new(-3), Err(DayError::OutOfRange(-3)));
        assert_eq!(Day::new(300), Err(DayError::OutOfRange(300)));
    }

    #[test]
    fn parses_from_str() {
        assert_eq!(" 12 ".parse::<Day>().unwrap().value(), 12);
        assert!(matches!("abc".parse::<Day>(), Err(DayError::Unparsable(_))));
        assert!(matches!("95".parse::<Day>(), Err(DayError::OutOfRange(95))));
    }

    #[test]
    fn neighbours_stop_at_edges() {
        assert_eq!(Day::FIRST.previous(), None);
        assert_eq!(Day::LAST.next(), None);
        assert_eq!(Day::new(10).unwrap().next().unwrap().value(), 11);
        assert_eq!(Day::all().count(), 90);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Day>("0").is_err());
        assert_eq!(serde_json::from_str::<Day>("42").unwrap().value(), 42);
        assert_eq!(serde_json::to_string(&Day::LAST).unwrap(), "90");
    }
}
