//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and the
//! aggregation engine.

pub mod backup;
pub mod export;
pub mod report;
pub mod transaction;

pub use backup::{handle_backup_command, BackupCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_balance, handle_spending, handle_summary, SpendingArgs, SummaryArgs};
pub use transaction::{
    handle_add, handle_delete, handle_list, handle_show, parse_amount, AddArgs, ListArgs,
};
