//! Transaction listing filters

use std::collections::BTreeSet;

use crate::models::{Transaction, TransactionType};

/// Categories offered when no transactions exist yet
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Food",
    "Rent",
    "Transport",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Salary",
    "Other",
];

/// Filter for listing transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Exact category match
    pub category: Option<String>,
    /// Exact type match
    pub kind: Option<TransactionType>,
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    /// Maximum number of results
    pub limit: Option<usize>,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a single transaction passes every set filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let found = txn
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }

        true
    }

    /// Matching transactions, newest first; same-day entries keep input order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut results: Vec<&Transaction> =
            transactions.iter().filter(|t| self.matches(t)).collect();
        results.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        results
    }
}

/// Sorted unique categories, or the defaults when there are none
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    let categories: BTreeSet<&str> = transactions.iter().map(|t| t.category.as_str()).collect();

    if categories.is_empty() {
        DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    } else {
        categories.into_iter().map(str::to_string).collect()
    }
}
