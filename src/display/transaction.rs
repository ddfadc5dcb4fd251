//! Transaction display formatting

use tabled::{settings::Style, Table, Tabled};

use super::report::truncate;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            amount: txn.signed_amount().to_string(),
            description: truncate(txn.description.as_deref().unwrap_or(""), 32),
        }
    }
}

/// Render transactions as a table, one row each, in the given order
pub fn format_transaction_table<'a, I>(transactions: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<TransactionRow> = transactions.into_iter().map(TransactionRow::from).collect();
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let count = rows.len();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n{} transaction(s)\n", table, count)
}

/// One category per line
pub fn format_category_list(categories: &[String]) -> String {
    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}
