//! Daily Spending
//!
//! Expense totals per calendar day, limited to the most recent days that saw
//! any spending.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use super::filter::filter_by_window;
use crate::display::report::format_bar;
use crate::error::SpendlensResult;
use crate::models::{Money, TimeWindow, Transaction};

/// Default number of days kept in the series
pub const DEFAULT_DAY_LIMIT: usize = 30;

/// Expense total for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySpendingPoint {
    pub date: NaiveDate,
    /// Short month and day ("Jan 5")
    pub label: String,
    pub amount: Money,
}

/// Short display label for a day
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Sum expenses per day, ascending by date, keeping only the latest
/// `day_limit` days
pub fn daily_spending<'a, I>(transactions: I, day_limit: usize) -> Vec<DailySpendingPoint>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut days: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        *days.entry(txn.date).or_default() += txn.amount;
    }

    let skip = days.len().saturating_sub(day_limit);
    days.into_iter()
        .skip(skip)
        .map(|(date, amount)| DailySpendingPoint {
            date,
            label: day_label(date),
            amount,
        })
        .collect()
}

/// Mean spend per day in the series, rounded to the cent; zero when empty
pub fn average_daily(days: &[DailySpendingPoint]) -> Money {
    let count = days.len() as i64;
    if count == 0 {
        return Money::zero();
    }
    let total: i64 = days.iter().map(|d| d.amount.cents()).sum();
    let rounded = (total.abs() + count / 2) / count;
    Money::from_cents(if total < 0 { -rounded } else { rounded })
}

/// Daily spending report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySpendingReport {
    pub window: TimeWindow,
    pub reference_date: NaiveDate,
    pub day_limit: usize,
    pub days: Vec<DailySpendingPoint>,
    pub total: Money,
    pub average_daily: Money,
}

impl DailySpendingReport {
    /// Generate the series for `window` anchored at `reference`
    pub fn generate(
        transactions: &[Transaction],
        window: TimeWindow,
        reference: NaiveDate,
        day_limit: usize,
    ) -> Self {
        let filtered = filter_by_window(transactions, window, reference);
        let days = daily_spending(filtered.iter().copied(), day_limit);
        let total: Money = days.iter().map(|d| d.amount).sum();
        let average_daily = average_daily(&days);

        tracing::debug!(%window, day_limit, days = days.len(), "generated daily spending");

        Self {
            window,
            reference_date: reference,
            day_limit,
            days,
            total,
            average_daily,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Daily Spending: {} (last {} day(s) with expenses)\n",
            self.window.label(),
            self.day_limit
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.days.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        let max = self
            .days
            .iter()
            .map(|d| d.amount.cents())
            .max()
            .unwrap_or(0) as f64;

        for day in &self.days {
            output.push_str(&format!(
                "{:<8} {:>12}  {}\n",
                day.label,
                day.amount,
                format_bar(day.amount.cents() as f64, max, 30)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<8} {:>12}\n", "TOTAL", self.total));
        output.push_str(&format!("{:<8} {:>12}\n", "AVG/DAY", self.average_daily));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Date", "Label", "Amount"])?;
        for day in &self.days {
            csv.write_record([
                day.date.to_string(),
                day.label.clone(),
                day.amount.format_plain(),
            ])?;
        }
        csv.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(cents: i64, day: NaiveDate) -> Transaction {
        Transaction::expense(Money::from_cents(cents), "Food", day)
    }

    #[test]
    fn test_groups_by_day_ascending() {
        let txns = vec![
            expense(300, date(2024, 1, 20)),
            expense(500, date(2024, 1, 5)),
            expense(200, date(2024, 1, 5)),
            Transaction::income(Money::from_cents(100000), "Salary", date(2024, 1, 1)),
        ];

        let days = daily_spending(&txns, DEFAULT_DAY_LIMIT);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(2024, 1, 5));
        assert_eq!(days[0].amount.cents(), 700);
        assert_eq!(days[0].label, "Jan 5");
        assert_eq!(days[1].label, "Jan 20");
    }

    #[test]
    fn test_keeps_latest_days_only() {
        let start = date(2023, 12, 1);
        let txns: Vec<Transaction> = (0..45)
            .map(|i| expense(100 + i, start + chrono::Duration::days(i)))
            .collect();

        let days = daily_spending(&txns, 30);
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].date, start + chrono::Duration::days(15));
        assert_eq!(days[29].date, start + chrono::Duration::days(44));
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_sorts_by_date_across_years() {
        let txns = vec![expense(100, date(2024, 1, 2)), expense(100, date(2023, 12, 30))];
        let days = daily_spending(&txns, 30);
        assert_eq!(days[0].label, "Dec 30");
        assert_eq!(days[1].label, "Jan 2");
    }

    #[test]
    fn test_empty_and_zero_limit() {
        let empty: Vec<Transaction> = Vec::new();
        assert!(daily_spending(&empty, 30).is_empty());

        let txns = vec![expense(100, date(2024, 1, 2))];
        assert!(daily_spending(&txns, 0).is_empty());
    }

    #[test]
    fn test_average_daily() {
        assert_eq!(average_daily(&[]), Money::zero());

        let txns = vec![
            expense(1000, date(2024, 1, 1)),
            expense(500, date(2024, 1, 1)),
            expense(1001, date(2024, 1, 2)),
            expense(500, date(2024, 1, 3)),
        ];
        let days = daily_spending(&txns, 30);
        // 3001 cents over 3 days
        assert_eq!(average_daily(&days).cents(), 1000);

        let report = DailySpendingReport::generate(&[], TimeWindow::All, date(2024, 1, 31), 30);
        assert!(report.average_daily.is_zero());
        assert!(report.total.is_zero());
    }

    #[test]
    fn test_report_output() {
        let txns = vec![expense(1250, date(2024, 1, 5)), expense(500, date(2023, 12, 5))];
        let report = DailySpendingReport::generate(&txns, TimeWindow::ThisMonth, date(2024, 1, 31), 30);
        assert_eq!(report.days.len(), 1);
        assert_eq!(report.total.cents(), 1250);
        assert_eq!(report.average_daily.cents(), 1250);
        let text = report.format_terminal();
        assert!(text.contains("Jan 5"));
        assert!(text.contains("AVG/DAY"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["averageDaily"], 12.5);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.contains("2024-01-05,Jan 5,12.50"));
    }
}
