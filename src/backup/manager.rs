//! Backup manager for the transactions file
//!
//! Backups are timestamped JSON archives in the backup directory. Only the
//! newest `retention` archives are kept when retention is enforced.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::storage::{parse_records, JsonTransactionStore, TransactionStore};

const BACKUP_PREFIX: &str = "transactions-backup-";
const MAX_NAME_ATTEMPTS: u32 = 1000;
pub const ARCHIVE_SCHEMA_VERSION: u32 = 1;

/// Metadata about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    pub filename: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    /// Suffix that separates backups created within the same millisecond
    pub sequence: u32,
    pub size_bytes: u64,
}

/// Backup archive format
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupArchive {
    pub schema_version: u32,
    pub created_at: DateTime<Utc>,
    /// Raw transaction records, validated again on restore
    pub transactions: serde_json::Value,
}

/// Manages backup creation, retention and restore
pub struct BackupManager {
    backup_dir: PathBuf,
    transactions_file: PathBuf,
    retention: usize,
}

impl BackupManager {
    pub fn new(paths: &TrackerPaths, retention: usize) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            transactions_file: paths.transactions_file(),
            retention: retention.max(1),
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Create a backup of the current transactions
    ///
    /// The data file is loaded through the JSON store first, so a corrupt
    /// file is reported instead of being archived. Returns the backup path.
    pub fn create_backup(&self) -> TrackerResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create backup directory: {}", e)))?;

        let transactions = JsonTransactionStore::new(&self.transactions_file).load_all()?;

        let now = Utc::now();
        let stamp = format!(
            "{}-{:03}",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );

        let archive = BackupArchive {
            schema_version: ARCHIVE_SCHEMA_VERSION,
            created_at: now,
            transactions: serde_json::to_value(&transactions)?,
        };

        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize backup: {}", e)))?;

        let (backup_path, mut file) = self.create_unique_file(&stamp)?;

        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| TrackerError::Io(format!("Failed to write backup file: {}", e)))?;

        info!(path = %backup_path.display(), count = transactions.len(), "created backup");
        Ok(backup_path)
    }

    /// Create a new archive file for `stamp` without touching existing ones
    ///
    /// The first free name of `<prefix><stamp>.json`, `<prefix><stamp>-1.json`,
    /// `<prefix><stamp>-2.json` and so on is taken.
    fn create_unique_file(&self, stamp: &str) -> TrackerResult<(PathBuf, File)> {
        for sequence in 0..MAX_NAME_ATTEMPTS {
            let filename = if sequence == 0 {
                format!("{}{}.json", BACKUP_PREFIX, stamp)
            } else {
                format!("{}{}-{}.json", BACKUP_PREFIX, stamp, sequence)
            };
            let path = self.backup_dir.join(filename);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(TrackerError::Io(format!(
                        "Failed to create backup file: {}",
                        e
                    )))
                }
            }
        }

        Err(TrackerError::Backup(format!(
            "No free backup file name for {}",
            stamp
        )))
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> TrackerResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| TrackerError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| {
            (b.created_at, b.sequence).cmp(&(a.created_at, a.sequence))
        });
        Ok(backups)
    }

    pub fn get_latest_backup(&self) -> TrackerResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }

    /// Find a backup by `latest`, a filename in the backup directory, or a path
    pub fn find_backup(&self, name: &str) -> TrackerResult<PathBuf> {
        if name == "latest" {
            return self
                .get_latest_backup()?
                .map(|info| info.path)
                .ok_or_else(|| TrackerError::backup_not_found(name));
        }

        let in_dir = self.backup_dir.join(name);
        if in_dir.is_file() {
            return Ok(in_dir);
        }

        let as_path = PathBuf::from(name);
        if as_path.is_file() {
            return Ok(as_path);
        }

        Err(TrackerError::backup_not_found(name))
    }

    /// Delete every backup older than the newest `retention` ones
    pub fn enforce_retention(&self) -> TrackerResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self.list_backups()?.into_iter().skip(self.retention) {
            fs::remove_file(&backup.path)
                .map_err(|e| TrackerError::Io(format!("Failed to delete old backup: {}", e)))?;
            debug!(path = %backup.path.display(), "pruned backup");
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce the retention policy
    pub fn create_backup_with_retention(&self) -> TrackerResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// Overwrite the transactions file with the contents of a backup
    ///
    /// Every archived record is validated before anything is written.
    /// Returns the number of restored transactions.
    pub fn restore(&self, backup_path: &Path) -> TrackerResult<usize> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read backup file: {}", e)))?;

        let archive: BackupArchive = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Backup(format!("Failed to parse backup file: {}", e)))?;

        if archive.schema_version > ARCHIVE_SCHEMA_VERSION {
            return Err(TrackerError::Backup(format!(
                "Unsupported backup schema version {}",
                archive.schema_version
            )));
        }

        let transactions = parse_records(archive.transactions)?;
        JsonTransactionStore::new(&self.transactions_file).save_all(&transactions)?;

        info!(path = %backup_path.display(), count = transactions.len(), "restored backup");
        Ok(transactions.len())
    }
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let stamp = filename.strip_prefix(BACKUP_PREFIX)?.strip_suffix(".json")?;
    let (created_at, sequence) = parse_backup_stamp(stamp)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        sequence,
        size_bytes,
    })
}

/// Parse `YYYYMMDD-HHMMSS-mmm` with an optional `-N` sequence suffix
fn parse_backup_stamp(stamp: &str) -> Option<(DateTime<Utc>, u32)> {
    let mut parts = stamp.split('-');
    let date_part = parts.next()?;
    let time_part = parts.next()?;
    let millis: u32 = parts.next()?.parse().ok()?;
    let sequence: u32 = match parts.next() {
        Some(n) => n.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() || date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
    let time = NaiveTime::parse_from_str(time_part, "%H%M%S").ok()?;
    let time = time.with_nanosecond(millis.checked_mul(1_000_000)?)?;

    Some((NaiveDateTime::new(date, time).and_utc(), sequence))
}
