//! Transaction model
//!
//! A transaction is a non-negative amount tagged as income or expense. The
//! direction lives in the type, never in the sign of the amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    /// Any unrecognized type; ignored by every aggregation
    #[serde(other)]
    Other,
}

impl TransactionType {
    /// Parse a type name, case-insensitively; unknown names map to `Other`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Self::Income,
            "expense" => Self::Expense,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A financial transaction, as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier
    #[serde(default)]
    pub id: TransactionId,

    /// Non-negative magnitude
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Free-form, user-defined category label
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Calendar date, no time component
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            kind,
            category: category.into(),
            description: None,
            date,
        }
    }

    /// Create an income transaction
    pub fn income(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(TransactionType::Income, amount, category, date)
    }

    /// Create an expense transaction
    pub fn expense(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(TransactionType::Expense, amount, category, date)
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Signed effect on a running balance: income adds, expense subtracts,
    /// anything else is zero
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
            TransactionType::Other => Money::zero(),
        }
    }

    /// Check the model invariants
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "amount must not be negative (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "category must not be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
