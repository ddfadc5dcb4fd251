//! Budget Utilization
//!
//! Spending against each monthly category budget, with a status
//! classification and overview totals.

use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::display::report::format_bar;
use crate::error::SpendlensResult;
use crate::models::{Budget, BudgetId, Money, MonthPeriod, Transaction};

/// Utilization at or above this percentage is "Near Limit"
pub const NEAR_LIMIT_PERCENT: i64 = 80;

/// Utilization at or above this percentage is "Over Budget"
pub const OVER_BUDGET_PERCENT: i64 = 100;

/// Health classification of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BudgetHealth {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Near Limit")]
    NearLimit,
    #[serde(rename = "Over Budget")]
    OverBudget,
}

impl BudgetHealth {
    /// Classify `spent` against `limit` using the unclamped ratio
    ///
    /// A zero limit is on track only while nothing has been spent.
    pub fn classify(spent: Money, limit: Money) -> Self {
        if limit.cents() <= 0 {
            return if spent.cents() > 0 {
                Self::OverBudget
            } else {
                Self::OnTrack
            };
        }

        // Compare in cents to keep the thresholds exact.
        let scaled = spent.cents() as i128 * 100;
        let limit = limit.cents() as i128;
        if scaled >= limit * OVER_BUDGET_PERCENT as i128 {
            Self::OverBudget
        } else if scaled >= limit * NEAR_LIMIT_PERCENT as i128 {
            Self::NearLimit
        } else {
            Self::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::NearLimit => "Near Limit",
            Self::OverBudget => "Over Budget",
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Utilization of a single budget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub budget_id: BudgetId,
    pub category: String,
    /// `None` when the budget carries an out-of-range month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<MonthPeriod>,
    pub spent: Money,
    pub limit: Money,
    /// `max(limit - spent, 0)`
    pub remaining: Money,
    /// Utilization in percent, clamped to 100, two decimals
    pub percentage: f64,
    pub status: BudgetHealth,
}

/// Compute utilization of `budget` from matching expenses in its month
pub fn budget_utilization<'a, I>(budget: &Budget, transactions: I) -> BudgetStatus
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let period = budget.period();

    let spent: Money = match period {
        Some(period) => {
            let start = period.start_date();
            let end = period.next_start();
            transactions
                .into_iter()
                .filter(|t| t.is_expense() && t.category == budget.category)
                .filter(|t| t.date >= start && t.date < end)
                .map(|t| t.amount)
                .sum()
        }
        None => Money::zero(),
    };

    let limit = budget.limit;
    let percentage = if limit.is_positive() {
        let raw = spent.cents() as f64 / limit.cents() as f64 * 100.0;
        (raw.min(100.0) * 100.0).round() / 100.0
    } else {
        0.0
    };

    let remaining = if spent < limit {
        limit - spent
    } else {
        Money::zero()
    };

    BudgetStatus {
        budget_id: budget.id.clone(),
        category: budget.category.clone(),
        period,
        spent,
        limit,
        remaining,
        percentage,
        status: BudgetHealth::classify(spent, limit),
    }
}

/// Budgets whose month and year equal `period`
pub fn budgets_for_period(budgets: &[Budget], period: MonthPeriod) -> Vec<&Budget> {
    budgets
        .iter()
        .filter(|b| b.month == period.month() && b.year == period.year())
        .collect()
}

/// Statuses for a set of budgets plus totals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub statuses: Vec<BudgetStatus>,
    pub total_limit: Money,
    pub total_spent: Money,
    pub on_track_count: usize,
    pub budget_count: usize,
}

/// One status per budget, in input order
pub fn budget_overview<'b, B>(budgets: B, transactions: &[Transaction]) -> BudgetOverview
where
    B: IntoIterator<Item = &'b Budget>,
{
    let statuses: Vec<BudgetStatus> = budgets
        .into_iter()
        .map(|budget| budget_utilization(budget, transactions))
        .collect();

    BudgetOverview {
        total_limit: statuses.iter().map(|s| s.limit).sum(),
        total_spent: statuses.iter().map(|s| s.spent).sum(),
        on_track_count: statuses
            .iter()
            .filter(|s| s.status == BudgetHealth::OnTrack)
            .count(),
        budget_count: statuses.len(),
        statuses,
    }
}

/// Budget overview report, optionally scoped to one month
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverviewReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<MonthPeriod>,
    #[serde(flatten)]
    pub overview: BudgetOverview,
}

impl BudgetOverviewReport {
    /// Generate the overview for every budget, or only those in `period`
    pub fn generate(
        budgets: &[Budget],
        transactions: &[Transaction],
        period: Option<MonthPeriod>,
    ) -> Self {
        let overview = match period {
            Some(period) => budget_overview(budgets_for_period(budgets, period), transactions),
            None => budget_overview(budgets, transactions),
        };

        tracing::debug!(
            budgets = overview.budget_count,
            on_track = overview.on_track_count,
            "generated budget overview"
        );

        Self { period, overview }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        match self.period {
            Some(period) => {
                output.push_str(&format!("Budget Overview - {}\n", period.long_label()))
            }
            None => output.push_str("Budget Overview - All Budgets\n"),
        }
        output.push_str(&"=".repeat(96));
        output.push('\n');

        if self.overview.statuses.is_empty() {
            output.push_str("No budgets defined.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>8} {:>12} {:>12} {:>12} {:>8}  {:<12} {}\n",
            "Category", "Month", "Spent", "Limit", "Remaining", "Used", "Status", "Progress"
        ));
        output.push_str(&"-".repeat(96));
        output.push('\n');

        for status in &self.overview.statuses {
            let month = status
                .period
                .map(|p| p.to_string())
                .unwrap_or_else(|| "?".to_string());
            let marker = if status.status == BudgetHealth::OverBudget {
                " *"
            } else {
                ""
            };

            output.push_str(&format!(
                "{:<20} {:>8} {:>12} {:>12} {:>12} {:>7.1}%  {:<12} {}{}\n",
                status.category,
                month,
                status.spent,
                status.limit,
                status.remaining,
                status.percentage,
                status.status,
                format_bar(status.percentage, 100.0, 16),
                marker
            ));
        }

        output.push_str(&"-".repeat(96));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>8} {:>12} {:>12}\n",
            "TOTAL", "", self.overview.total_spent, self.overview.total_limit
        ));
        output.push_str(&format!(
            "\n{} of {} budget(s) on track\n",
            self.overview.on_track_count, self.overview.budget_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Budget ID",
            "Category",
            "Period",
            "Spent",
            "Limit",
            "Remaining",
            "Percentage",
            "Status",
        ])?;
        for status in &self.overview.statuses {
            csv.write_record([
                status.budget_id.to_string(),
                status.category.clone(),
                status.period.map(|p| p.to_string()).unwrap_or_default(),
                status.spent.format_plain(),
                status.limit.format_plain(),
                status.remaining.format_plain(),
                format!("{:.2}", status.percentage),
                status.status.to_string(),
            ])?;
        }
        csv.flush()?;

        Ok(())
    }
}
