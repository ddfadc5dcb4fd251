//! Monthly Trends
//!
//! Income, expenses and net for each month of a rolling window. The series is
//! always complete: months with no activity appear with zero values.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::error::SpendlensResult;
use crate::models::{Money, MonthPeriod, Transaction, TransactionType};

/// Default number of months in a trend window
pub const DEFAULT_TREND_MONTHS: usize = 6;

/// Aggregates for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub period: MonthPeriod,
    /// Short month name ("Jan")
    pub month_label: String,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
}

impl MonthlyTrend {
    fn empty(period: MonthPeriod) -> Self {
        Self {
            period,
            month_label: period.short_label().to_string(),
            income: Money::zero(),
            expenses: Money::zero(),
            net: Money::zero(),
        }
    }
}

/// One entry per month for the `month_count` months ending at the reference
/// month, oldest first
pub fn monthly_trends<'a, I>(
    transactions: I,
    month_count: usize,
    reference: NaiveDate,
) -> Vec<MonthlyTrend>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut trends: Vec<MonthlyTrend> = MonthPeriod::containing(reference)
        .trailing(month_count)
        .into_iter()
        .map(MonthlyTrend::empty)
        .collect();

    let slots: HashMap<MonthPeriod, usize> = trends
        .iter()
        .enumerate()
        .map(|(i, t)| (t.period, i))
        .collect();

    for txn in transactions {
        let Some(&slot) = slots.get(&MonthPeriod::containing(txn.date)) else {
            continue;
        };
        match txn.kind {
            TransactionType::Income => trends[slot].income += txn.amount,
            TransactionType::Expense => trends[slot].expenses += txn.amount,
            TransactionType::Other => {}
        }
    }

    for trend in &mut trends {
        trend.net = trend.income - trend.expenses;
    }

    trends
}

/// Monthly trend report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub reference_date: NaiveDate,
    pub months: Vec<MonthlyTrend>,
}

impl TrendReport {
    /// Generate trends for the `month_count` months ending at `reference`
    pub fn generate(transactions: &[Transaction], month_count: usize, reference: NaiveDate) -> Self {
        let months = monthly_trends(transactions, month_count, reference);

        tracing::debug!(%reference, month_count, "generated monthly trends");

        Self {
            reference_date: reference,
            months,
        }
    }

    /// Average net across the window
    pub fn average_net(&self) -> Money {
        if self.months.is_empty() {
            return Money::zero();
        }
        let total: Money = self.months.iter().map(|m| m.net).sum();
        Money::from_cents(total.cents() / self.months.len() as i64)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Monthly Trends: {} month(s) ending {}\n",
            self.months.len(),
            MonthPeriod::containing(self.reference_date)
        ));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>16} {:>16} {:>16}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!(
                "{:<10} {:>16} {:>16} {:>16}\n",
                format!("{} {}", month.month_label, month.period.year()),
                month.income,
                month.expenses,
                month.net
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!("Average net: {}\n", self.average_net()));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Period", "Month", "Income", "Expenses", "Net"])?;
        for month in &self.months {
            csv.write_record([
                month.period.to_string(),
                month.month_label.clone(),
                month.income.format_plain(),
                month.expenses.format_plain(),
                month.net.format_plain(),
            ])?;
        }
        csv.flush()?;

        Ok(())
    }
}
