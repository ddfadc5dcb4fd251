//! CSV export of raw transactions
//!
//! Writes the same column layout the importer reads, so an export can be
//! imported again. Transactions of an unknown type are left out, since the
//! importer only accepts income and expense rows.

use std::io::Write;

use crate::error::SpendlensResult;
use crate::models::{Transaction, TransactionType};

/// Export income and expense transactions to CSV, newest first; returns the
/// number of rows written
pub fn export_transactions_csv<'a, I, W>(transactions: I, writer: &mut W) -> SpendlensResult<usize>
where
    I: IntoIterator<Item = &'a Transaction>,
    W: Write,
{
    let mut sorted: Vec<&Transaction> = transactions
        .into_iter()
        .filter(|t| t.kind != TransactionType::Other)
        .collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Date", "Type", "Category", "Amount", "Description"])?;

    for txn in &sorted {
        csv.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.amount.format_plain(),
            txn.description.clone().unwrap_or_default(),
        ])?;
    }
    csv.flush()?;

    tracing::info!(count = sorted.len(), "exported transactions");
    Ok(sorted.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::import_transactions_csv;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_export_newest_first() {
        let txns = vec![
            Transaction::income(Money::from_cents(100000), "Salary", date(1)),
            Transaction::expense(Money::from_cents(5000), "Food", date(5))
                .with_description("Groceries, weekly"),
        ];

        let mut buf = Vec::new();
        let count = export_transactions_csv(&txns, &mut buf).unwrap();
        assert_eq!(count, 2);

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Type,Category,Amount,Description");
        assert_eq!(lines[1], "2024-01-05,expense,Food,50.00,\"Groceries, weekly\"");
        assert_eq!(lines[2], "2024-01-01,income,Salary,1000.00,");
    }

    #[test]
    fn test_export_can_be_imported() {
        let txns = vec![
            Transaction::expense(Money::from_cents(1999), "Transport", date(9)),
            Transaction::new(TransactionType::Other, Money::from_cents(500), "Misc", date(10)),
        ];

        let mut buf = Vec::new();
        let count = export_transactions_csv(&txns, &mut buf).unwrap();
        assert_eq!(count, 1);

        let imported = import_transactions_csv(buf.as_slice()).unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].amount, txns[0].amount);
        assert_eq!(imported[0].category, "Transport");
        assert_eq!(imported[0].date, date(9));
    }
}
