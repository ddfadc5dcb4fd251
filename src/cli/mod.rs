//! CLI command handlers
//!
//! Bridges clap argument parsing with the storage layer and the reporting
//! engine.

pub mod report;
pub mod transaction;

pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
