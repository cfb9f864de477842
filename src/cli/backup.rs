//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Create a new backup and prune old ones
    Create,

    /// List all available backups
    List {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Delete old backups according to the retention setting
    Prune,

    /// Restore the transactions file from a backup
    Restore {
        /// Backup filename or path (use 'latest' for most recent)
        backup: String,

        /// Skip the confirmation notice and overwrite current data
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    paths: &TrackerPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> TrackerResult<()> {
    let manager = BackupManager::new(paths, settings.backup_retention);

    match cmd {
        BackupCommands::Create => {
            let (backup_path, pruned) = manager.create_backup_with_retention()?;
            println!("Backup created: {}", display_name(&backup_path));
            println!("Location: {}", backup_path.display());
            if !pruned.is_empty() {
                println!("Pruned {} old backup(s).", pruned.len());
            }
        }

        BackupCommands::List { verbose } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: fintrack backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");

            for (i, backup) in backups.iter().enumerate() {
                let age = chrono::Utc::now().signed_duration_since(backup.created_at);

                if verbose {
                    println!(
                        "{}. {}\n   Created: {}\n   Size: {}\n   Age: {}\n",
                        i + 1,
                        backup.filename,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                        format_size(backup.size_bytes),
                        format_duration(age),
                    );
                } else {
                    println!(
                        "  {}. {} ({} ago, {})",
                        i + 1,
                        backup.filename,
                        format_duration(age),
                        format_size(backup.size_bytes),
                    );
                }
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Prune => {
            let deleted = manager.enforce_retention()?;
            if deleted.is_empty() {
                println!(
                    "No backups to prune (keeping the newest {}).",
                    settings.backup_retention
                );
            } else {
                println!("Deleted {} backup(s).", deleted.len());
            }
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = manager.find_backup(&backup)?;

            if !force {
                println!(
                    "Restoring {} will overwrite ALL current transactions!",
                    display_name(&backup_path)
                );
                println!("To proceed, run again with --force flag:");
                println!("  fintrack backup restore {} --force", backup);
                return Ok(());
            }

            let safety = manager.create_backup()?;
            println!("Current data saved to: {}", display_name(&safety));

            let restored = manager.restore(&backup_path)?;
            println!(
                "Restored {} transaction(s) from {}.",
                restored,
                display_name(&backup_path)
            );
        }
    }

    Ok(())
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format a duration in human-readable form
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    format!("{}d", hours / 24)
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::storage::{open_json_store, TransactionStore};
    use tempfile::TempDir;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_duration(chrono::Duration::seconds(30)), "30s");
        assert_eq!(format_duration(chrono::Duration::hours(49)), "2d");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }

    #[test]
    fn test_restore_requires_force() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let mut store = open_json_store(&paths).unwrap();
        let txn = Transaction::create(5.0, "Food", "expense", None).unwrap();
        store.append(txn.clone()).unwrap();

        handle_backup_command(&paths, &settings, BackupCommands::Create).unwrap();
        store.delete_by_id(&txn.id).unwrap();

        let restore = |force| BackupCommands::Restore {
            backup: "latest".into(),
            force,
        };

        handle_backup_command(&paths, &settings, restore(false)).unwrap();
        assert!(store.load_all().unwrap().is_empty());

        handle_backup_command(&paths, &settings, restore(true)).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![txn]);

        // The pre-restore backup is kept alongside the original
        let manager = BackupManager::new(&paths, settings.backup_retention);
        assert_eq!(manager.list_backups().unwrap().len(), 2);
    }
}
