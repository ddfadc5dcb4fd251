//! Budget model
//!
//! A budget caps spending in one category for one calendar month. It is
//! associated with transactions purely by category name and date range.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::period::MonthPeriod;

/// A monthly spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Opaque identifier
    #[serde(default)]
    pub id: BudgetId,

    /// Category this budget applies to (matched exactly)
    pub category: String,

    /// Spending ceiling for the month
    pub limit: Money,

    /// Month number, 1-12
    pub month: u32,

    /// Four-digit year
    pub year: i32,
}

impl Budget {
    /// Create a budget for a category and period
    pub fn new(category: impl Into<String>, limit: Money, period: MonthPeriod) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            limit,
            month: period.month(),
            year: period.year(),
        }
    }

    /// The calendar month this budget covers, or `None` if `month` is invalid
    pub fn period(&self) -> Option<MonthPeriod> {
        MonthPeriod::new(self.year, self.month)
    }

    /// Check the model invariants
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit(self.limit));
        }

        if self.period().is_none() {
            return Err(BudgetValidationError::InvalidMonth(self.month));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:04}-{:02} limit {}",
            self.category, self.year, self.month, self.limit
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeLimit(Money),
    InvalidMonth(u32),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "category must not be empty"),
            Self::NegativeLimit(limit) => write!(f, "limit must not be negative (got {})", limit),
            Self::InvalidMonth(month) => write!(f, "month must be 1-12 (got {})", month),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
