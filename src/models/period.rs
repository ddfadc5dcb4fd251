//! Calendar month periods
//!
//! Budgets, trends and the dashboard all work on whole calendar months.
//! Month arithmetic (including the December to January rollover) lives here
//! and nowhere else.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const LONG_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A single calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a period, returning `None` when `month` is outside 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// First day of the following month (exclusive upper bound)
    pub fn next_start(&self) -> NaiveDate {
        self.next().start_date()
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next_start() - Duration::days(1)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next month
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

    /// Get the previous month
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

    /// The `count` months ending at this one, oldest first
    pub fn trailing(&self, count: usize) -> Vec<Self> {
        let mut periods = Vec::with_capacity(count);
        let mut current = *self;
        for _ in 0..count {
            periods.push(current);
            current = current.prev();
        }
        periods.reverse();
        periods
    }

    /// Short month name ("Jan")
    pub fn short_label(&self) -> &'static str {
        SHORT_MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Long month name with year ("January 2025")
    pub fn long_label(&self) -> String {
        format!("{} {}", LONG_MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Parse a period string in the form "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(PeriodParseError::InvalidMonth(month))
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:04}-{:02}", self.year, self.month))
    }
}

impl From<MonthPeriod> for String {
    fn from(period: MonthPeriod) -> Self {
        period.to_string()
    }
}

impl TryFrom<String> for MonthPeriod {
    type Error = PeriodParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
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
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
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
    fn test_month_bounds() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        assert_eq!(jan.start_date(), date(2025, 1, 1));
        assert_eq!(jan.end_date(), date(2025, 1, 31));
        assert_eq!(jan.next_start(), date(2025, 2, 1));

        let feb_leap = MonthPeriod::new(2024, 2).unwrap();
        assert_eq!(feb_leap.end_date(), date(2024, 2, 29));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let dec = MonthPeriod::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthPeriod::new(2025, 1).unwrap());
        assert_eq!(dec.next_start(), date(2025, 1, 1));
        assert_eq!(dec.end_date(), date(2024, 12, 31));
        assert_eq!(
            MonthPeriod::new(2025, 1).unwrap().prev(),
            MonthPeriod::new(2024, 12).unwrap()
        );
    }

    #[test]
    fn test_rejects_invalid_month() {
        assert!(MonthPeriod::new(2025, 0).is_none());
        assert!(MonthPeriod::new(2025, 13).is_none());
    }

    #[test]
    fn test_contains() {
        let jan = MonthPeriod::new(2025, 1).unwrap();
        assert!(jan.contains(date(2025, 1, 15)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert!(!jan.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_trailing_crosses_year_boundary() {
        let feb = MonthPeriod::new(2025, 2).unwrap();
        let labels: Vec<String> = feb.trailing(4).iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, vec!["2024-11", "2024-12", "2025-01", "2025-02"]);
        assert!(feb.trailing(0).is_empty());
    }

    #[test]
    fn test_labels() {
        let sep = MonthPeriod::new(2025, 9).unwrap();
        assert_eq!(sep.short_label(), "Sep");
        assert_eq!(sep.long_label(), "September 2025");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            MonthPeriod::parse("2025-01").unwrap(),
            MonthPeriod::new(2025, 1).unwrap()
        );
        assert_eq!(
            MonthPeriod::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(MonthPeriod::parse("January").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let period = MonthPeriod::new(2025, 1).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2025-01\"");
        let back: MonthPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
        assert!(serde_json::from_str::<MonthPeriod>("\"2025-00\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthPeriod::new(2025, 3).unwrap().to_string(), "2025-03");
    }
}
