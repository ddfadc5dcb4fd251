use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use spendlens::cli::{handle_report_command, handle_transaction_command};
use spendlens::config::{Settings, SpendlensPaths};
use spendlens::logging::init_tracing;
use spendlens::storage::Snapshot;

#[derive(Parser)]
#[command(
    name = "spendlens",
    version,
    about = "Income, expense and budget reports from your transaction history",
    long_about = "spendlens reads a snapshot of income and expense transactions and \
                  monthly category budgets, and reports totals, category breakdowns, \
                  monthly trends, daily spending and budget utilization."
)]
struct Cli {
    /// Base directory for config and data
    #[arg(long, global = true, env = "SPENDLENS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Transactions JSON file (defaults to <data-dir>/data/transactions.json)
    #[arg(long, global = true)]
    transactions: Option<PathBuf>,

    /// Budgets JSON file (defaults to <data-dir>/data/budgets.json)
    #[arg(long, global = true)]
    budgets: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate reports
    #[command(subcommand)]
    Report(spendlens::cli::ReportCommands),

    /// List, import and export transactions
    #[command(subcommand, alias = "txn")]
    Transaction(spendlens::cli::TransactionCommands),

    /// Create the config file and empty data files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => SpendlensPaths::with_base_dir(dir),
        None => SpendlensPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let transactions_file = cli
        .transactions
        .unwrap_or_else(|| paths.transactions_file());
    let budgets_file = cli.budgets.unwrap_or_else(|| paths.budgets_file());

    match cli.command {
        Some(Commands::Report(cmd)) => {
            tracing::debug!(?cmd, "dispatching report command");
            let snapshot = Snapshot::load_files(&transactions_file, &budgets_file)
                .context("Failed to load data")?;
            handle_report_command(&snapshot, &settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            tracing::debug!(?cmd, "dispatching transaction command");
            let mut snapshot = Snapshot::load_files(&transactions_file, &budgets_file)
                .context("Failed to load data")?;
            handle_transaction_command(&mut snapshot, &transactions_file, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing spendlens at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            let snapshot = Snapshot::load_files(&transactions_file, &budgets_file)
                .context("Failed to load existing data")?;
            if !transactions_file.exists() {
                snapshot.save_transactions(&transactions_file)?;
            }
            if !budgets_file.exists() {
                snapshot.save_budgets(&budgets_file)?;
            }

            println!("Initialization complete!");
            println!();
            println!("Transactions: {}", transactions_file.display());
            println!("Budgets:      {}", budgets_file.display());
            println!();
            println!("Run 'spendlens transaction import <file.csv>' to load transactions.");
        }
        Some(Commands::Config) => {
            println!("spendlens Configuration");
            println!("=======================");
            println!("Config file:       {}", paths.settings_file().display());
            println!("Transactions file: {}", transactions_file.display());
            println!("Budgets file:      {}", budgets_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default window:  {}", settings.default_window);
            println!("  Trend months:    {}", settings.trend_months);
            println!("  Daily limit:     {}", settings.daily_limit);
            println!("  Recent limit:    {}", settings.recent_limit);
        }
        None => {
            println!("spendlens - transaction aggregation and reporting");
            println!();
            println!("Run 'spendlens --help' for usage information.");
            println!("Run 'spendlens report summary' for this month's income and expenses.");
        }
    }

    Ok(())
}
