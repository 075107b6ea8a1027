//! Monthly period keys
//!
//! Payroll and billing months are identified by a "YYYY-MM" key rather than a
//! full date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, serialized as "YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

impl PeriodKey {
    /// Create a period key, validating the month
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period containing a date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the period
    pub fn start_date(&self) -> NaiveDate {
        // year/month were validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a "YYYY-MM" key
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for PeriodKey {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PeriodKey> for String {
    fn from(key: PeriodKey) -> Self {
        key.to_string()
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid period format: {} (expected YYYY-MM)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_bounds() {
        let period = PeriodKey::new(2024, 2).unwrap();
        assert_eq!(period.start_date(), date(2024, 2, 1));
        assert_eq!(period.end_date(), date(2024, 2, 29));

        let december = PeriodKey::new(2024, 12).unwrap();
        assert_eq!(december.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_navigation() {
        let dec = PeriodKey::new(2024, 12).unwrap();
        assert_eq!(dec.next(), PeriodKey::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn test_contains() {
        let jul = PeriodKey::new(2024, 7).unwrap();
        assert!(jul.contains(date(2024, 7, 1)));
        assert!(jul.contains(date(2024, 7, 31)));
        assert!(!jul.contains(date(2024, 8, 1)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(PeriodKey::parse("2024-07").unwrap(), PeriodKey::new(2024, 7).unwrap());
        assert_eq!(PeriodKey::parse("2024-7").unwrap(), PeriodKey::new(2024, 7).unwrap());
        assert_eq!(PeriodKey::parse("2024-13"), Err(PeriodParseError::InvalidMonth(13)));
        assert!(PeriodKey::parse("2024").is_err());
        assert!(PeriodKey::parse("24-07").is_err());
        assert!(PeriodKey::parse("2024-07-01").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let period = PeriodKey::new(2024, 7).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2024-07\"");

        let parsed: PeriodKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);
        assert!(serde_json::from_str::<PeriodKey>("\"2024-00\"").is_err());
    }
}
