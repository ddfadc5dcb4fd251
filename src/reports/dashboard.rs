//! Dashboard Summary
//!
//! The at-a-glance view: all-time balance, the current month's income and
//! expenses, where the money went this month, and the latest activity.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use super::category::{category_breakdown, CategoryTotal};
use super::filter::filter_by_window;
use super::summary::income_vs_expenses;
use crate::error::SpendlensResult;
use crate::models::{Money, MonthPeriod, TimeWindow, Transaction};

/// Default number of recent transactions shown
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub period: MonthPeriod,
    /// All-time income minus expenses; may be negative
    pub total_balance: Money,
    pub monthly_income: Money,
    pub monthly_expenses: Money,
    pub spending_by_category: Vec<CategoryTotal>,
    pub recent_transactions: Vec<Transaction>,
}

/// Most recent transactions by date, newest first; same-day entries keep
/// their input order
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Build the dashboard view for the month containing `reference`
pub fn dashboard_summary(
    transactions: &[Transaction],
    reference: NaiveDate,
    recent_limit: usize,
) -> DashboardSummary {
    let all_time = income_vs_expenses(transactions);
    let this_month = filter_by_window(transactions, TimeWindow::ThisMonth, reference);
    let monthly = income_vs_expenses(this_month.iter().copied());

    DashboardSummary {
        period: MonthPeriod::containing(reference),
        total_balance: all_time.net_income,
        monthly_income: monthly.total_income,
        monthly_expenses: monthly.total_expenses,
        spending_by_category: category_breakdown(this_month.iter().copied()),
        recent_transactions: recent_transactions(transactions, recent_limit)
            .into_iter()
            .cloned()
            .collect(),
    }
}

impl DashboardSummary {
    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard - {}\n", self.period.long_label()));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>14}\n", "Total Balance", self.total_balance));
        output.push_str(&format!("{:<20} {:>14}\n", "Monthly Income", self.monthly_income));
        output.push_str(&format!("{:<20} {:>14}\n", "Monthly Expenses", self.monthly_expenses));

        output.push_str("\nSpending by Category\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.spending_by_category.is_empty() {
            output.push_str("No expense data for this period.\n");
        }
        for category in &self.spending_by_category {
            output.push_str(&format!("{:<30} {:>14}\n", category.name, category.value));
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent_transactions.is_empty() {
            output.push_str("No transactions yet.\n");
        }
        for txn in &self.recent_transactions {
            output.push_str(&format!(
                "{}  {:<8} {:<20} {:>14}\n",
                txn.date,
                txn.kind,
                txn.category,
                txn.signed_amount()
            ));
        }

        output
    }

    /// Export the headline figures to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Metric", "Value"])?;
        csv.write_record(["Period".to_string(), self.period.to_string()])?;
        csv.write_record(["Total Balance".to_string(), self.total_balance.format_plain()])?;
        csv.write_record(["Monthly Income".to_string(), self.monthly_income.format_plain()])?;
        csv.write_record(["Monthly Expenses".to_string(), self.monthly_expenses.format_plain()])?;
        for category in &self.spending_by_category {
            csv.write_record([format!("Category: {}", category.name), category.value.format_plain()])?;
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

    fn history() -> Vec<Transaction> {
        vec![
            Transaction::income(Money::from_cents(200000), "Salary", date(2023, 12, 1)),
            Transaction::expense(Money::from_cents(150000), "Rent", date(2023, 12, 2)),
            Transaction::expense(Money::from_cents(5000), "Food", date(2024, 1, 5)),
            Transaction::expense(Money::from_cents(3000), "Food", date(2024, 1, 20)),
            Transaction::income(Money::from_cents(100000), "Salary", date(2024, 1, 1)),
        ]
    }

    #[test]
    fn test_balance_is_all_time_and_monthly_is_scoped() {
        let summary = dashboard_summary(&history(), date(2024, 1, 31), DEFAULT_RECENT_LIMIT);
        assert_eq!(summary.total_balance.cents(), 142000);
        assert_eq!(summary.monthly_income.cents(), 100000);
        assert_eq!(summary.monthly_expenses.cents(), 8000);
        assert_eq!(summary.spending_by_category.len(), 1);
        assert_eq!(summary.spending_by_category[0].name, "Food");
    }

    #[test]
    fn test_balance_may_be_negative() {
        let txns = vec![Transaction::expense(Money::from_cents(100), "Food", date(2024, 1, 1))];
        let summary = dashboard_summary(&txns, date(2024, 1, 1), 10);
        assert_eq!(summary.total_balance.cents(), -100);
    }

    #[test]
    fn test_recent_orders_newest_first_and_keeps_ties_stable() {
        let txns = vec![
            Transaction::expense(Money::from_cents(1), "A", date(2024, 1, 1)),
            Transaction::expense(Money::from_cents(2), "B", date(2024, 1, 3)),
            Transaction::expense(Money::from_cents(3), "C", date(2024, 1, 3)),
            Transaction::expense(Money::from_cents(4), "D", date(2024, 1, 2)),
        ];
        let recent: Vec<&str> = recent_transactions(&txns, 3)
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(recent, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_empty_input() {
        let summary = dashboard_summary(&[], date(2024, 1, 31), 10);
        assert!(summary.total_balance.is_zero());
        assert!(summary.recent_transactions.is_empty());
        assert!(summary.format_terminal().contains("No transactions yet"));
    }

    #[test]
    fn test_output() {
        let summary = dashboard_summary(&history(), date(2024, 1, 31), 2);
        assert_eq!(summary.recent_transactions.len(), 2);
        assert!(summary.format_terminal().contains("January 2024"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalBalance"], 1420.0);
        assert_eq!(json["recentTransactions"][0]["type"], "expense");

        let mut buf = Vec::new();
        summary.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.contains("Total Balance,1420.00"));
        assert!(csv.contains("Category: Food,80.00"));
    }
}
