//! Backup system for the transactions file
//!
//! # Backup Format
//!
//! Backups are stored as JSON files named
//! `transactions-backup-YYYYMMDD-HHMMSS-mmm.json` with the following structure:
//! - `schema_version`: Version of the archive layout
//! - `created_at`: Timestamp when the backup was created
//! - `transactions`: The transaction records
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::backup::BackupManager;
//! use finance_tracker::config::TrackerPaths;
//!
//! let paths = TrackerPaths::new()?;
//! let manager = BackupManager::new(&paths, 10);
//!
//! let backup_path = manager.create_backup()?;
//! manager.enforce_retention()?;
//!
//! // Later
//! let restored = manager.restore(&backup_path)?;
//! ```

mod manager;

pub use manager::{BackupArchive, BackupInfo, BackupManager, ARCHIVE_SCHEMA_VERSION};
