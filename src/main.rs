use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_export_command, handle_history_command,
    handle_report_command, handle_summary_command, BudgetCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::display::DisplayOptions;
use expense_tracker::interactive::{self, run_interactive};
use expense_tracker::models::Category;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records expenses to a CSV ledger and compares what you spend \
                  against a monthly budget, recommending a daily allowance for \
                  the rest of the month. Runs an interactive menu when no \
                  command is given."
)]
struct Cli {
    /// Directory holding the ledger, budget and settings files
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Use this ledger file instead of <data-dir>/expenses.csv
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    /// Use this budget file instead of <data-dir>/budget.txt
    #[arg(long, global = true)]
    budget_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    #[command(alias = "menu")]
    Interactive,

    /// Record an expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category: Food, Home, Others or Fun
        #[arg(short, long)]
        category: Category,
        /// Expense date (dd/mm/yyyy, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Summarize spending against the stored budget
    Summary {
        /// Render categories as a table
        #[arg(long)]
        table: bool,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Write a text expense report
    Report {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export the ledger and budget as JSON
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recently recorded expenses and budget changes
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let mut paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    if let Some(ledger) = cli.ledger {
        paths = paths.with_ledger_file(ledger);
    }
    if let Some(budget_file) = cli.budget_file {
        paths = paths.with_budget_file(budget_file);
    }
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    if !settings.audit_enabled {
        storage = storage.without_audit();
    }

    match cli.command {
        None | Some(Commands::Interactive) => {
            let mut console = interactive::stdio();
            run_interactive(
                &storage,
                DisplayOptions::from_settings(&settings),
                &mut console,
            )?;
        }
        Some(Commands::Add {
            description,
            amount,
            category,
            date,
        }) => {
            handle_add_command(
                &storage,
                &settings,
                description,
                &amount,
                category,
                date.as_deref(),
            )?;
        }
        Some(Commands::Summary { table }) => {
            handle_summary_command(&storage, &settings, table)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report { output }) => {
            handle_report_command(&storage, &settings, &output)?;
        }
        Some(Commands::Export { output, pretty }) => {
            handle_export_command(&storage, &output, pretty)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, count)?;
        }
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Color output:    {}", settings.color);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}

/// Send tracing output to stderr, filtered by RUST_LOG or the configured level
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={}", settings.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
