use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use finance_tracker::cli::{
    handle_add, handle_backup_command, handle_balance, handle_delete, handle_export_command,
    handle_list, handle_show, handle_spending, handle_summary, AddArgs, BackupCommands,
    ExportArgs, ListArgs, SpendingArgs, SummaryArgs,
};
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::logging::init_tracing;
use finance_tracker::storage::open_json_store;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal income and expense tracker",
    long_about = "fintrack records income and expense transactions in a local JSON \
                  file and reports balances, monthly summaries and spending by \
                  category from the command line."
)]
struct Cli {
    /// Base directory for data, backups and settings
    #[arg(long, global = true, env = "FINANCE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new transaction
    Add(AddArgs),

    /// List recorded transactions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one transaction
    Show {
        /// Transaction ID
        id: String,
    },

    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },

    /// Show all-time income, expense and balance
    Balance,

    /// Show the summary for one month
    Summary(SummaryArgs),

    /// Show totals per category, largest first
    Spending(SpendingArgs),

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export transactions as CSV or JSON
    Export(ExportArgs),

    /// Create the data directories and write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let mut store = open_json_store(&paths)?;

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add(&mut store, &settings, args)?;
        }
        Some(Commands::List(args)) => handle_list(&store, &settings, args)?,
        Some(Commands::Show { id }) => handle_show(&store, &settings, &id)?,
        Some(Commands::Delete { id }) => handle_delete(&mut store, &id)?,
        Some(Commands::Balance) => handle_balance(&store, &settings)?,
        Some(Commands::Summary(args)) => handle_summary(&store, &settings, args)?,
        Some(Commands::Spending(args)) => handle_spending(&store, &settings, args)?,
        Some(Commands::Backup(cmd)) => handle_backup_command(&paths, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&store, args)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized fintrack at: {}", paths.base_dir().display());
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Backup directory:  {}", paths.backup_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Backup retention: {}", settings.backup_retention);
            println!("  List limit:       {}", settings.list_limit);
        }
        None => {
            println!("fintrack - Personal income and expense tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack add expense 12.50 Food' to record your first transaction.");
        }
    }

    Ok(())
}
