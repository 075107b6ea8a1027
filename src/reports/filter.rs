//! Date-window filtering
//!
//! A [`DateWindow`] is inclusive at both ends and either end may be missing,
//! in which case that side is unbounded. Records without a date never match.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::{KasaError, KasaResult};
use crate::models::PeriodKey;

/// Inclusive date window with optional bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// A window that matches every dated record
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The calendar month of a period key
    pub fn from_period(period: &PeriodKey) -> Self {
        Self::between(period.start_date(), period.end_date())
    }

    /// Build a window from optional "YYYY-MM-DD" strings
    pub fn parse_bounds(start: Option<&str>, end: Option<&str>) -> KasaResult<Self> {
        let start = start.map(|s| parse_date(s, "start")).transpose()?;
        let end = end.map(|s| parse_date(s, "end")).transpose()?;

        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(KasaError::Validation(format!(
                    "Start date {} is after end date {}",
                    s, e
                )));
            }
        }

        Ok(Self { start, end })
    }

    /// True when `date` lies within the window; missing bounds are skipped
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }

    /// Like [`contains`](Self::contains), but a missing date never matches
    pub fn matches(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|d| self.contains(d))
    }

    /// True when the span `[record_start, record_end]` overlaps the window
    ///
    /// A record with either end missing never matches.
    pub fn intersects_span(
        &self,
        record_start: Option<NaiveDate>,
        record_end: Option<NaiveDate>,
    ) -> bool {
        let (Some(record_start), Some(record_end)) = (record_start, record_end) else {
            return false;
        };
        if let Some(end) = self.end {
            if record_start > end {
                return false;
            }
        }
        if let Some(start) = self.start {
            if record_end < start {
                return false;
            }
        }
        true
    }

    /// True when the period's calendar month overlaps the window
    pub fn intersects_period(&self, period: &PeriodKey) -> bool {
        self.intersects_span(Some(period.start_date()), Some(period.end_date()))
    }

    /// Period test on a raw "YYYY-MM" key; an unparsable key never matches
    pub fn intersects_period_str(&self, key: &str) -> bool {
        PeriodKey::parse(key).is_ok_and(|period| self.intersects_period(&period))
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(s), Some(e)) => write!(f, "{} - {}", s, e),
            (Some(s), None) => write!(f, "{} -", s),
            (None, Some(e)) => write!(f, "- {}", e),
            (None, None) => write!(f, "tüm zamanlar"),
        }
    }
}

/// Keep the items whose date falls in the window
pub fn filter_by_date<'a, T, F>(items: &'a [T], window: &DateWindow, date_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<NaiveDate>,
{
    items
        .iter()
        .filter(|item| window.matches(date_of(item)))
        .collect()
}

/// Keep the items whose span overlaps the window
pub fn filter_by_span<'a, T, F>(items: &'a [T], window: &DateWindow, span_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> (Option<NaiveDate>, Option<NaiveDate>),
{
    items
        .iter()
        .filter(|item| {
            let (start, end) = span_of(item);
            window.intersects_span(start, end)
        })
        .collect()
}

fn parse_date(s: &str, which: &str) -> KasaResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        KasaError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            which, s
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn july() -> DateWindow {
        DateWindow::between(date(2024, 7, 1), date(2024, 7, 31))
    }

    #[test]
    fn test_inclusive_at_both_boundaries() {
        let window = july();
        assert!(window.contains(date(2024, 7, 1)));
        assert!(window.contains(date(2024, 7, 31)));
        assert!(!window.contains(date(2024, 6, 30)));
        assert!(!window.contains(date(2024, 8, 1)));
    }

    #[test]
    fn test_missing_start_is_unbounded() {
        let window = DateWindow::new(None, Some(date(2024, 7, 31)));
        assert!(window.contains(date(1990, 1, 1)));
        assert!(window.contains(date(2024, 7, 31)));
        assert!(!window.contains(date(2024, 8, 1)));
    }

    #[test]
    fn test_missing_end_is_unbounded() {
        let window = DateWindow::new(Some(date(2024, 7, 1)), None);
        assert!(window.contains(date(2099, 12, 31)));
        assert!(window.contains(date(2024, 7, 1)));
        assert!(!window.contains(date(2024, 6, 30)));
    }

    #[test]
    fn test_missing_date_never_matches() {
        assert!(!DateWindow::unbounded().matches(None));
        assert!(DateWindow::unbounded().matches(Some(date(2024, 1, 1))));
    }

    #[test]
    fn test_span_intersection() {
        let window = july();
        // Contains window
        assert!(window.intersects_span(Some(date(2024, 1, 1)), Some(date(2024, 12, 31))));
        // Touches start boundary
        assert!(window.intersects_span(Some(date(2024, 6, 1)), Some(date(2024, 7, 1))));
        // Touches end boundary
        assert!(window.intersects_span(Some(date(2024, 7, 31)), Some(date(2024, 9, 1))));
        // Entirely before / after
        assert!(!window.intersects_span(Some(date(2024, 5, 1)), Some(date(2024, 6, 30))));
        assert!(!window.intersects_span(Some(date(2024, 8, 1)), Some(date(2024, 9, 1))));
        // Missing side
        assert!(!window.intersects_span(None, Some(date(2024, 7, 10))));
        assert!(!window.intersects_span(Some(date(2024, 7, 10)), None));
    }

    #[test]
    fn test_period_intersection() {
        let window = DateWindow::between(date(2024, 7, 15), date(2024, 8, 15));
        assert!(window.intersects_period_str("2024-07"));
        assert!(window.intersects_period_str("2024-08"));
        assert!(!window.intersects_period_str("2024-06"));
        assert!(!window.intersects_period_str("2024-09"));
        assert!(!window.intersects_period_str("temmuz"));

        let open = DateWindow::new(Some(date(2024, 2, 29)), None);
        assert!(open.intersects_period(&PeriodKey::new(2024, 2).unwrap()));
    }

    #[test]
    fn test_from_period() {
        let window = DateWindow::from_period(&PeriodKey::new(2024, 2).unwrap());
        assert_eq!(window, DateWindow::between(date(2024, 2, 1), date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_bounds() {
        let window = DateWindow::parse_bounds(Some("2024-07-01"), None).unwrap();
        assert_eq!(window.start, Some(date(2024, 7, 1)));
        assert_eq!(window.end, None);

        assert!(DateWindow::parse_bounds(Some("01.07.2024"), None).is_err());
        assert!(DateWindow::parse_bounds(Some("2024-08-01"), Some("2024-07-01")).is_err());
    }

    #[test]
    fn test_filter_helpers() {
        let items = vec![
            (1, Some(date(2024, 7, 10))),
            (2, None),
            (3, Some(date(2024, 8, 10))),
        ];
        let kept = filter_by_date(&items, &july(), |item| item.1);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, 1);

        let spans = vec![(date(2024, 6, 1), date(2024, 7, 5)), (date(2024, 8, 1), date(2024, 8, 5))];
        let kept = filter_by_span(&spans, &july(), |s| (Some(s.0), Some(s.1)));
        assert_eq!(kept.len(), 1);
    }
}
