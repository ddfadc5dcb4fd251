//! Export module for spendlens
//!
//! Every report can be written as a terminal table, CSV, pretty JSON or
//! YAML. Raw transactions can also be exported back to the import CSV
//! layout.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::write_json;
pub use yaml::write_yaml;

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{SpendlensError, SpendlensResult};
use crate::reports::{
    BudgetOverviewReport, CategoryBreakdownReport, DailySpendingReport, DashboardSummary,
    SummaryReport, TrendReport,
};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = SpendlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "terminal" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(SpendlensError::Export(format!(
                "Unknown format '{}' (expected table, json, yaml or csv)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        };
        f.pad(name)
    }
}

/// A report that renders itself for the terminal and as CSV
pub trait Report: Serialize {
    fn format_terminal(&self) -> String;
    fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlensResult<()>;
}

macro_rules! impl_report {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Report for $ty {
                fn format_terminal(&self) -> String {
                    <$ty>::format_terminal(self)
                }

                fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlensResult<()> {
                    <$ty>::export_csv(self, writer)
                }
            }
        )*
    };
}

impl_report!(
    SummaryReport,
    CategoryBreakdownReport,
    TrendReport,
    DailySpendingReport,
    BudgetOverviewReport,
    DashboardSummary,
);

/// Write any serializable value as JSON or YAML
pub fn write_structured<T, W>(value: &T, format: OutputFormat, writer: &mut W) -> SpendlensResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    match format {
        OutputFormat::Json => write_json(value, writer),
        OutputFormat::Yaml => write_yaml(value, writer),
        other => Err(SpendlensError::Export(format!(
            "{} is not a structured format",
            other
        ))),
    }
}

/// Write a report in the requested format
pub fn render_report<R, W>(report: &R, format: OutputFormat, writer: &mut W) -> SpendlensResult<()>
where
    R: Report,
    W: Write,
{
    match format {
        OutputFormat::Table => writer
            .write_all(report.format_terminal().as_bytes())
            .map_err(|e| SpendlensError::Export(e.to_string())),
        OutputFormat::Csv => report.export_csv(writer),
        structured => write_structured(report, structured, writer),
    }
}
