//! Named time windows used to filter transactions before aggregation

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named time-range predicate relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimeWindow {
    /// Same calendar month and year as the reference date
    #[default]
    ThisMonth,
    /// Same calendar year as the reference date
    ThisYear,
    /// On or after the reference date minus six calendar months
    LastSixMonths,
    /// No filtering
    All,
}

impl TimeWindow {
    /// All windows, in the order they are offered to users
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::ThisMonth,
        TimeWindow::LastSixMonths,
        TimeWindow::ThisYear,
        TimeWindow::All,
    ];

    /// Inclusive lower bound of the window, if it has one
    ///
    /// `LastSixMonths` clamps to the end of shorter months, so Aug 31 maps to
    /// the last day of February.
    pub fn lower_bound(&self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::ThisMonth => reference.with_day(1),
            Self::ThisYear => NaiveDate::from_ymd_opt(reference.year(), 1, 1),
            Self::LastSixMonths => Some(
                reference
                    .checked_sub_months(Months::new(6))
                    .unwrap_or(NaiveDate::MIN),
            ),
            Self::All => None,
        }
    }

    /// Check whether `date` falls inside the window anchored at `reference`
    pub fn contains(&self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::ThisMonth => date.year() == reference.year() && date.month() == reference.month(),
            Self::ThisYear => date.year() == reference.year(),
            Self::LastSixMonths => self
                .lower_bound(reference)
                .map_or(true, |start| date >= start),
            Self::All => true,
        }
    }

    /// Human-readable label ("Last 6 Months")
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThisMonth => "This Month",
            Self::ThisYear => "This Year",
            Self::LastSixMonths => "Last 6 Months",
            Self::All => "All Time",
        }
    }

    /// Parse a window name
    ///
    /// Accepts the camelCase wire names ("thisMonth") as well as kebab-case
    /// ("this-month") and a few short forms ("month", "6m").
    pub fn parse(s: &str) -> Result<Self, WindowParseError> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "thismonth" | "month" => Ok(Self::ThisMonth),
            "thisyear" | "year" => Ok(Self::ThisYear),
            "lastsixmonths" | "last6months" | "6m" => Ok(Self::LastSixMonths),
            "all" | "alltime" => Ok(Self::All),
            _ => Err(WindowParseError(s.trim().to_string())),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ThisMonth => "thisMonth",
            Self::ThisYear => "thisYear",
            Self::LastSixMonths => "lastSixMonths",
            Self::All => "all",
        };
        f.pad(name)
    }
}

impl FromStr for TimeWindow {
    type Err = WindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for window parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowParseError(pub String);

impl fmt::Display for WindowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid time window: '{}' (expected thisMonth, thisYear, lastSixMonths or all)",
            self.0
        )
    }
}

impl std::error::Error for WindowParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_this_month() {
        let reference = date(2024, 1, 31);
        assert!(TimeWindow::ThisMonth.contains(date(2024, 1, 1), reference));
        assert!(!TimeWindow::ThisMonth.contains(date(2023, 1, 15), reference));
        assert!(!TimeWindow::ThisMonth.contains(date(2024, 2, 1), reference));
    }

    #[test]
    fn test_this_year() {
        let reference = date(2024, 6, 15);
        assert!(TimeWindow::ThisYear.contains(date(2024, 12, 31), reference));
        assert!(!TimeWindow::ThisYear.contains(date(2023, 12, 31), reference));
    }

    #[test]
    fn test_last_six_months_is_inclusive_without_upper_bound() {
        let reference = date(2024, 7, 15);
        assert!(TimeWindow::LastSixMonths.contains(date(2024, 1, 15), reference));
        assert!(!TimeWindow::LastSixMonths.contains(date(2024, 1, 14), reference));
        assert!(TimeWindow::LastSixMonths.contains(date(2025, 3, 1), reference));
    }

    #[test]
    fn test_last_six_months_clamps_short_months() {
        assert_eq!(
            TimeWindow::LastSixMonths.lower_bound(date(2024, 8, 31)),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            TimeWindow::LastSixMonths.lower_bound(date(2024, 3, 15)),
            Some(date(2023, 9, 15))
        );
    }

    #[test]
    fn test_parse_accepts_wire_and_cli_names() {
        assert_eq!(TimeWindow::parse("thisMonth").unwrap(), TimeWindow::ThisMonth);
        assert_eq!(TimeWindow::parse("this-year").unwrap(), TimeWindow::ThisYear);
        assert_eq!(TimeWindow::parse("6m").unwrap(), TimeWindow::LastSixMonths);
        assert_eq!(TimeWindow::parse("ALL").unwrap(), TimeWindow::All);
        assert!(TimeWindow::parse("fortnight").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for window in TimeWindow::ALL {
            assert_eq!(TimeWindow::parse(&window.to_string()).unwrap(), window);
        }
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&TimeWindow::LastSixMonths).unwrap();
        assert_eq!(json, "\"lastSixMonths\"");
    }
}
