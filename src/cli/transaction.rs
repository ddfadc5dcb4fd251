//! CLI commands for transactions

use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::display::{format_category_list, format_transaction_table};
use crate::error::{SpendlensError, SpendlensResult};
use crate::export::export_transactions_csv;
use crate::models::TransactionType;
use crate::storage::{distinct_categories, import_transactions_csv, Snapshot, TransactionQuery};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Exact category
        #[arg(short, long)]
        category: Option<String>,
        /// income or expense
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Substring of the description (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Import transactions from CSV (Date,Type,Category,Amount,Description)
    Import {
        /// Path to CSV file
        file: PathBuf,
        /// Parse and validate without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Export transactions to CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List known categories
    Categories,
}

/// Handle transaction commands
///
/// `transactions_file` is where an import is persisted.
pub fn handle_transaction_command(
    snapshot: &mut Snapshot,
    transactions_file: &Path,
    cmd: TransactionCommands,
) -> SpendlensResult<()> {
    match cmd {
        TransactionCommands::List {
            category,
            kind,
            search,
            limit,
        } => {
            let query = TransactionQuery {
                category,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                search,
                limit,
            };
            let results = query.apply(&snapshot.transactions);
            print!("{}", format_transaction_table(results));
        }
        TransactionCommands::Import { file, dry_run } => {
            let handle = File::open(&file).map_err(|e| {
                SpendlensError::Io(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let imported = import_transactions_csv(BufReader::new(handle))?;
            let count = imported.len();

            if dry_run {
                println!("{} transaction(s) parsed from {} (dry run, nothing saved)", count, file.display());
                return Ok(());
            }

            snapshot.extend_transactions(imported)?;
            snapshot.save_transactions(transactions_file)?;
            println!(
                "Imported {} transaction(s) from {} into {}",
                count,
                file.display(),
                transactions_file.display()
            );
        }
        TransactionCommands::Export { output } => match output {
            Some(path) => {
                let file = File::create(&path).map_err(|e| {
                    SpendlensError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let mut writer = BufWriter::new(file);
                let count = export_transactions_csv(&snapshot.transactions, &mut writer)?;
                writer.flush()?;
                println!("Exported {} transaction(s) to: {}", count, path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                export_transactions_csv(&snapshot.transactions, &mut handle)?;
            }
        },
        TransactionCommands::Categories => {
            print!("{}", format_category_list(&distinct_categories(&snapshot.transactions)));
        }
    }

    Ok(())
}

fn parse_kind(value: &str) -> SpendlensResult<TransactionType> {
    match TransactionType::parse(value) {
        TransactionType::Other => Err(SpendlensError::Validation(format!(
            "Invalid transaction type: {}. Use income or expense",
            value
        ))),
        kind => Ok(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("Income").unwrap(), TransactionType::Income);
        assert!(parse_kind("transfer").is_err());
    }

    #[test]
    fn test_import_persists() {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("in.csv");
        let json_path = temp_dir.path().join("data").join("transactions.json");
        std::fs::write(
            &csv_path,
            "Date,Type,Category,Amount\n2024-01-05,expense,Food,50\n",
        )
        .unwrap();

        let mut snapshot = Snapshot::default();
        handle_transaction_command(
            &mut snapshot,
            &json_path,
            TransactionCommands::Import {
                file: csv_path.clone(),
                dry_run: true,
            },
        )
        .unwrap();
        assert!(snapshot.transactions.is_empty());
        assert!(!json_path.exists());

        handle_transaction_command(
            &mut snapshot,
            &json_path,
            TransactionCommands::Import {
                file: csv_path,
                dry_run: false,
            },
        )
        .unwrap();
        assert_eq!(snapshot.transactions.len(), 1);

        let reloaded = Snapshot::load_files(&json_path, &temp_dir.path().join("none.json")).unwrap();
        assert_eq!(reloaded.transactions, snapshot.transactions);
    }
}
