//! spendlens - transaction aggregation and reporting for personal finance
//!
//! Turns a snapshot of income and expense transactions plus monthly category
//! budgets into the derived views a finance dashboard shows: income vs.
//! expenses, category breakdowns, monthly trends, daily spending and budget
//! utilization.
//!
//! # Architecture
//!
//! - `models`: transactions, budgets, money, calendar months and time windows
//! - `reports`: the pure reporting engine and its report types
//! - `storage`: JSON snapshot loading, CSV import and listing queries
//! - `export`: CSV, JSON and YAML output
//! - `display`: terminal formatting helpers
//! - `config`: paths and user settings
//! - `cli`: command handlers for the `spendlens` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendlens::models::{Money, TimeWindow, Transaction};
//! use spendlens::reports::{category_breakdown, filter_by_window, income_vs_expenses};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let txns = vec![
//!     Transaction::expense(Money::from_cents(5000), "Food", date),
//!     Transaction::income(Money::from_cents(100000), "Salary", date),
//! ];
//!
//! let this_month = filter_by_window(&txns, TimeWindow::ThisMonth, date);
//! let totals = income_vs_expenses(this_month.iter().copied());
//! assert_eq!(totals.net_income, Money::from_cents(95000));
//! assert_eq!(category_breakdown(&txns)[0].name, "Food");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SpendlensError, SpendlensResult};
