//! Core data models for spendlens
//!
//! Transactions and budgets are inputs owned by an external backend; the
//! remaining types (money, periods, windows) support the reporting engine.

pub mod budget;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;
pub mod window;

pub use budget::{Budget, BudgetValidationError};
pub use ids::{BudgetId, TransactionId};
pub use money::Money;
pub use period::{MonthPeriod, PeriodParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
pub use window::{TimeWindow, WindowParseError};
