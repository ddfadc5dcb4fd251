//! Reporting engine for spendlens
//!
//! Pure aggregation functions over transaction and budget snapshots, plus a
//! report type per view that can render itself for the terminal or as CSV.

pub mod budget_status;
pub mod category;
pub mod daily;
pub mod dashboard;
pub mod filter;
pub mod summary;
pub mod trends;

pub use budget_status::{
    budget_overview, budget_utilization, budgets_for_period, BudgetHealth, BudgetOverview,
    BudgetOverviewReport, BudgetStatus,
};
pub use category::{
    category_breakdown, hue_for_index, CategoryBreakdownReport, CategoryTotal, REMAINDER_LABEL,
};
pub use daily::{
    average_daily, daily_spending, DailySpendingPoint, DailySpendingReport, DEFAULT_DAY_LIMIT,
};
pub use dashboard::{dashboard_summary, recent_transactions, DashboardSummary, DEFAULT_RECENT_LIMIT};
pub use filter::filter_by_window;
pub use summary::{income_vs_expenses, IncomeVsExpenses, SummaryReport};
pub use trends::{monthly_trends, MonthlyTrend, TrendReport, DEFAULT_TREND_MONTHS};
