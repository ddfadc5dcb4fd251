//! Storage layer for spendlens
//!
//! Transactions and budgets live in two JSON array files. They are loaded
//! into an immutable [`Snapshot`], validated once at the boundary, and handed
//! to the reporting engine.

pub mod file_io;
pub mod import;
pub mod query;

pub use file_io::{read_json_list, write_json_atomic};
pub use import::import_transactions_csv;
pub use query::{distinct_categories, TransactionQuery, DEFAULT_CATEGORIES};

use std::path::Path;

use crate::config::SpendlensPaths;
use crate::error::{SpendlensError, SpendlensResult};
use crate::models::{Budget, Transaction};

/// Transactions and budgets as loaded from disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    /// Build a snapshot from in-memory records, validating each one
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> SpendlensResult<Self> {
        let snapshot = Self {
            transactions,
            budgets,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load from the data directory; missing files are empty lists
    pub fn load(paths: &SpendlensPaths) -> SpendlensResult<Self> {
        Self::load_files(&paths.transactions_file(), &paths.budgets_file())
    }

    /// Load from explicit file paths; missing files are empty lists
    pub fn load_files(transactions: &Path, budgets: &Path) -> SpendlensResult<Self> {
        let snapshot = Self::new(read_json_list(transactions)?, read_json_list(budgets)?)?;

        tracing::info!(
            transactions = snapshot.transactions.len(),
            budgets = snapshot.budgets.len(),
            "loaded snapshot"
        );

        Ok(snapshot)
    }

    /// Check every record against the model invariants
    pub fn validate(&self) -> SpendlensResult<()> {
        for txn in &self.transactions {
            txn.validate()
                .map_err(|e| SpendlensError::invalid_record("Transaction", txn.id.as_str(), e.to_string()))?;
        }

        for budget in &self.budgets {
            budget
                .validate()
                .map_err(|e| SpendlensError::invalid_record("Budget", budget.id.as_str(), e.to_string()))?;
        }

        Ok(())
    }

    /// Append records, validating them first
    pub fn extend_transactions(&mut self, transactions: Vec<Transaction>) -> SpendlensResult<usize> {
        for txn in &transactions {
            txn.validate()
                .map_err(|e| SpendlensError::invalid_record("Transaction", txn.id.as_str(), e.to_string()))?;
        }

        let added = transactions.len();
        self.transactions.extend(transactions);
        Ok(added)
    }

    /// Persist the transaction list atomically
    pub fn save_transactions(&self, path: &Path) -> SpendlensResult<()> {
        write_json_atomic(path, &self.transactions)?;
        tracing::info!(count = self.transactions.len(), path = %path.display(), "saved transactions");
        Ok(())
    }

    /// Persist the budget list atomically
    pub fn save_budgets(&self, path: &Path) -> SpendlensResult<()> {
        write_json_atomic(path, &self.budgets)
    }
}
