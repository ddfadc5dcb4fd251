//! Income vs. Expenses Summary
//!
//! Totals income and expenses over a time window.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use super::filter::filter_by_window;
use crate::error::SpendlensResult;
use crate::models::{Money, TimeWindow, Transaction, TransactionType};

/// Income and expense totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeVsExpenses {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Always `total_income - total_expenses`
    pub net_income: Money,
}

/// Sum income and expense amounts; transactions of any other type are ignored
pub fn income_vs_expenses<'a, I>(transactions: I) -> IncomeVsExpenses
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();

    for txn in transactions {
        match txn.kind {
            TransactionType::Income => total_income += txn.amount,
            TransactionType::Expense => total_expenses += txn.amount,
            TransactionType::Other => {}
        }
    }

    IncomeVsExpenses {
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
    }
}

/// Summary report for one time window
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub window: TimeWindow,
    pub reference_date: NaiveDate,
    #[serde(flatten)]
    pub totals: IncomeVsExpenses,
    /// Number of transactions inside the window
    pub transaction_count: usize,
}

impl SummaryReport {
    /// Generate the summary for `window` anchored at `reference`
    pub fn generate(transactions: &[Transaction], window: TimeWindow, reference: NaiveDate) -> Self {
        let filtered = filter_by_window(transactions, window, reference);
        let totals = income_vs_expenses(filtered.iter().copied());

        tracing::debug!(
            %window,
            %reference,
            count = filtered.len(),
            net = totals.net_income.cents(),
            "generated income/expense summary"
        );

        Self {
            window,
            reference_date: reference,
            totals,
            transaction_count: filtered.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Income vs. Expenses: {} (as of {})\n",
            self.window.label(),
            self.reference_date
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total Income", self.totals.total_income
        ));
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total Expenses", self.totals.total_expenses
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>14}\n", "Net Income", self.totals.net_income));
        output.push_str(&format!("\nTransactions: {}\n", self.transaction_count));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Window",
            "Reference Date",
            "Total Income",
            "Total Expenses",
            "Net Income",
            "Transaction Count",
        ])?;
        csv.write_record([
            self.window.to_string(),
            self.reference_date.to_string(),
            self.totals.total_income.format_plain(),
            self.totals.total_expenses.format_plain(),
            self.totals.net_income.format_plain(),
            self.transaction_count.to_string(),
        ])?;
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

    fn scenario() -> Vec<Transaction> {
        vec![
            Transaction::expense(Money::from_cents(5000), "Food", date(2024, 1, 5)),
            Transaction::expense(Money::from_cents(3000), "Food", date(2024, 1, 20)),
            Transaction::income(Money::from_cents(100000), "Salary", date(2024, 1, 1)),
        ]
    }

    #[test]
    fn test_income_vs_expenses_scenario() {
        let totals = income_vs_expenses(&scenario());
        assert_eq!(totals.total_income.cents(), 100000);
        assert_eq!(totals.total_expenses.cents(), 8000);
        assert_eq!(totals.net_income.cents(), 92000);
    }

    #[test]
    fn test_net_is_exact_difference() {
        let mut txns = scenario();
        txns.push(Transaction::expense(Money::from_cents(99999), "Rent", date(2024, 1, 2)));
        let totals = income_vs_expenses(&txns);
        assert_eq!(
            totals.net_income,
            totals.total_income - totals.total_expenses
        );
        assert!(totals.net_income.is_negative());
    }

    #[test]
    fn test_unknown_type_is_ignored() {
        let mut txns = scenario();
        let mut odd = Transaction::expense(Money::from_cents(777), "Misc", date(2024, 1, 3));
        odd.kind = TransactionType::Other;
        txns.push(odd);

        assert_eq!(income_vs_expenses(&txns), income_vs_expenses(&scenario()));
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Transaction> = Vec::new();
        assert_eq!(income_vs_expenses(&empty), IncomeVsExpenses::default());
    }

    #[test]
    fn test_report_filters_by_window() {
        let mut txns = scenario();
        txns.push(Transaction::income(Money::from_cents(5000), "Gift", date(2023, 12, 25)));

        let report = SummaryReport::generate(&txns, TimeWindow::ThisMonth, date(2024, 1, 31));
        assert_eq!(report.transaction_count, 3);
        assert_eq!(report.totals.net_income.cents(), 92000);

        let all = SummaryReport::generate(&txns, TimeWindow::All, date(2024, 1, 31));
        assert_eq!(all.totals.total_income.cents(), 105000);
    }

    #[test]
    fn test_serialized_field_names() {
        let report = SummaryReport::generate(&scenario(), TimeWindow::ThisMonth, date(2024, 1, 31));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalIncome"], 1000.0);
        assert_eq!(json["totalExpenses"], 80.0);
        assert_eq!(json["netIncome"], 920.0);
        assert_eq!(json["window"], "thisMonth");
    }

    #[test]
    fn test_terminal_and_csv_output() {
        let report = SummaryReport::generate(&scenario(), TimeWindow::ThisMonth, date(2024, 1, 31));
        let output = report.format_terminal();
        assert!(output.contains("This Month"));
        assert!(output.contains("$920.00"));

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.starts_with("Window,Reference Date,Total Income"));
        assert!(csv.contains("thisMonth,2024-01-31,1000.00,80.00,920.00,3"));
    }
}
