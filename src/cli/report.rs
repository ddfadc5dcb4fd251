//! CLI commands for reports

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{SpendlensError, SpendlensResult};
use crate::export::{render_report, OutputFormat, Report};
use crate::models::{MonthPeriod, TimeWindow};
use crate::reports::{
    dashboard_summary, BudgetOverviewReport, CategoryBreakdownReport, DailySpendingReport,
    SummaryReport, TrendReport,
};
use crate::storage::Snapshot;

/// Where and how to write a report
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: table, json, yaml or csv (csv when --output is set)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    fn resolve_format(&self) -> SpendlensResult<OutputFormat> {
        match (&self.format, &self.output) {
            (Some(format), _) => format.parse(),
            (None, Some(_)) => Ok(OutputFormat::Csv),
            (None, None) => Ok(OutputFormat::Table),
        }
    }
}

/// Reference date for window-relative reports
#[derive(Args, Debug, Clone, Default)]
pub struct AsOfArgs {
    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long = "as-of")]
    pub as_of: Option<String>,
}

impl AsOfArgs {
    fn resolve(&self) -> SpendlensResult<NaiveDate> {
        match &self.as_of {
            Some(s) => parse_date(s),
            None => Ok(chrono::Local::now().date_naive()),
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income vs. expenses for a time window
    #[command(alias = "income")]
    Summary {
        /// thisMonth, thisYear, lastSixMonths or all
        #[arg(short, long)]
        window: Option<String>,
        #[command(flatten)]
        as_of: AsOfArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Expenses grouped by category
    #[command(alias = "spending")]
    Categories {
        #[arg(short, long)]
        window: Option<String>,
        /// Show the N largest categories, the rest summed as "(other)"
        #[arg(long)]
        top: Option<usize>,
        #[command(flatten)]
        as_of: AsOfArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Monthly income, expenses and net
    Trends {
        /// Number of months, ending at the reference month
        #[arg(short, long)]
        months: Option<usize>,
        #[command(flatten)]
        as_of: AsOfArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Expenses per day
    Daily {
        #[arg(short, long)]
        window: Option<String>,
        /// Number of most recent days with expenses
        #[arg(short, long)]
        days: Option<usize>,
        #[command(flatten)]
        as_of: AsOfArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Budget utilization
    #[command(alias = "budget")]
    Budgets {
        /// Only budgets for this month (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Balance, this month's totals and recent activity
    Dashboard {
        /// Number of recent transactions
        #[arg(short, long)]
        recent: Option<usize>,
        #[command(flatten)]
        as_of: AsOfArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Handle report commands
pub fn handle_report_command(
    snapshot: &Snapshot,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendlensResult<()> {
    let txns = snapshot.transactions.as_slice();

    match cmd {
        ReportCommands::Summary {
            window,
            as_of,
            output,
        } => {
            let window = parse_window(window.as_deref(), settings)?;
            let report = SummaryReport::generate(txns, window, as_of.resolve()?);
            emit(&report, &output)
        }
        ReportCommands::Categories {
            window,
            top,
            as_of,
            output,
        } => {
            let window = parse_window(window.as_deref(), settings)?;
            let mut report = CategoryBreakdownReport::generate(txns, window, as_of.resolve()?);
            if let Some(n) = top {
                report.keep_top(n);
            }
            emit(&report, &output)
        }
        ReportCommands::Trends {
            months,
            as_of,
            output,
        } => {
            let months = months.unwrap_or(settings.trend_months);
            let report = TrendReport::generate(txns, months, as_of.resolve()?);
            emit(&report, &output)
        }
        ReportCommands::Daily {
            window,
            days,
            as_of,
            output,
        } => {
            // The daily series is bounded by day count, so default to everything
            let window = match window {
                Some(w) => parse_window(Some(&w), settings)?,
                None => TimeWindow::All,
            };
            let days = days.unwrap_or(settings.daily_limit);
            let report = DailySpendingReport::generate(txns, window, as_of.resolve()?, days);
            emit(&report, &output)
        }
        ReportCommands::Budgets { period, output } => {
            let period = period.as_deref().map(parse_period).transpose()?;
            let report = BudgetOverviewReport::generate(&snapshot.budgets, txns, period);
            emit(&report, &output)
        }
        ReportCommands::Dashboard {
            recent,
            as_of,
            output,
        } => {
            let recent = recent.unwrap_or(settings.recent_limit);
            let summary = dashboard_summary(txns, as_of.resolve()?, recent);
            emit(&summary, &output)
        }
    }
}

/// Write a report to stdout or to the requested file
fn emit<R: Report>(report: &R, args: &OutputArgs) -> SpendlensResult<()> {
    let format = args.resolve_format()?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SpendlensError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            render_report(report, format, &mut writer)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), %format, "report written");
            println!("Report exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render_report(report, format, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn parse_window(value: Option<&str>, settings: &Settings) -> SpendlensResult<TimeWindow> {
    match value {
        Some(s) => TimeWindow::parse(s).map_err(|e| SpendlensError::Validation(e.to_string())),
        None => Ok(settings.default_window),
    }
}

fn parse_period(value: &str) -> SpendlensResult<MonthPeriod> {
    MonthPeriod::parse(value).map_err(|e| {
        SpendlensError::Validation(format!(
            "Invalid period format: {}. Use YYYY-MM (e.g., 2025-01)",
            e
        ))
    })
}

fn parse_date(value: &str) -> SpendlensResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        SpendlensError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", value))
    })
}
