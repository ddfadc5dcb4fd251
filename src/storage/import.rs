//! CSV transaction import
//!
//! Reads `Date,Type,Category,Amount,Description` files. Headers are matched
//! case-insensitively and may appear in any order; `Description` and `Id` are
//! optional. Every row is validated, and the first bad row aborts the import
//! with its line number.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::{Money, Transaction, TransactionId, TransactionType};

/// Accepted date formats, tried in order
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMapping {
    date: usize,
    kind: usize,
    category: usize,
    amount: usize,
    description: Option<usize>,
    id: Option<usize>,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> SpendlensResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| SpendlensError::Import {
                line: 1,
                message: format!("missing required column '{}'", name),
            })
        };

        Ok(Self {
            date: require("date")?,
            kind: require("type")?,
            category: require("category")?,
            amount: require("amount")?,
            description: find("description"),
            id: find("id"),
        })
    }
}

/// Parse and validate transactions from CSV
pub fn import_transactions_csv<R: Read>(reader: R) -> SpendlensResult<Vec<Transaction>> {
    let mut csv = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mapping = ColumnMapping::from_headers(csv.headers()?)?;
    let mut transactions = Vec::new();

    for (index, result) in csv.records().enumerate() {
        let fallback_line = index as u64 + 2;
        let record = result.map_err(|e| SpendlensError::Import {
            line: e.position().map_or(fallback_line, |p| p.line()),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(fallback_line, |p| p.line());

        let txn = parse_record(&record, &mapping)
            .map_err(|message| SpendlensError::Import { line, message })?;
        transactions.push(txn);
    }

    tracing::info!(count = transactions.len(), "parsed CSV import");
    Ok(transactions)
}

fn parse_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<Transaction, String> {
    let field = |index: usize, name: &str| {
        record
            .get(index)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| format!("missing {}", name))
    };

    let date = parse_date(field(mapping.date, "date")?)?;

    let raw_kind = field(mapping.kind, "type")?;
    let kind = match TransactionType::parse(raw_kind) {
        TransactionType::Other => {
            return Err(format!(
                "unknown type '{}' (expected income or expense)",
                raw_kind
            ))
        }
        kind => kind,
    };

    let category = field(mapping.category, "category")?;

    let raw_amount = field(mapping.amount, "amount")?;
    let amount = Money::parse(raw_amount)
        .map_err(|e| format!("invalid amount '{}': {}", raw_amount, e))?;

    let mut txn = Transaction::new(kind, amount, category, date);

    if let Some(id) = mapping.id.and_then(|i| record.get(i)).filter(|v| !v.is_empty()) {
        txn.id = TransactionId::from(id);
    }
    if let Some(description) = mapping
        .description
        .and_then(|i| record.get(i))
        .filter(|v| !v.is_empty())
    {
        txn = txn.with_description(description);
    }

    txn.validate().map_err(|e| e.to_string())?;
    Ok(txn)
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("invalid date '{}' (expected YYYY-MM-DD)", value))
}
