//! Storage layer for the finance tracker
//!
//! [`TransactionStore`] is the collaborator the rest of the crate persists
//! through. Each operation is a sequential load-then-save unit of work; there
//! is no locking, so a store must not be shared between concurrent writers.

pub mod file_io;
pub mod memory;
pub mod transactions;

pub use file_io::{read_json_value, write_json_atomic};
pub use memory::MemoryStore;
pub use transactions::{parse_records, JsonTransactionStore};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;
use crate::models::{Transaction, TransactionId};

/// Durable collection of transactions
pub trait TransactionStore {
    /// Load every stored transaction in stored order (empty if nothing saved yet)
    fn load_all(&self) -> TrackerResult<Vec<Transaction>>;

    /// Replace the stored collection
    fn save_all(&mut self, transactions: &[Transaction]) -> TrackerResult<()>;

    /// Add one transaction to the end of the collection
    fn append(&mut self, transaction: Transaction) -> TrackerResult<()> {
        let mut transactions = self.load_all()?;
        transactions.push(transaction);
        self.save_all(&transactions)
    }

    /// Remove the transaction with `id`
    ///
    /// Returns `false`, without writing anything, when no record matches.
    fn delete_by_id(&mut self, id: &TransactionId) -> TrackerResult<bool> {
        let mut transactions = self.load_all()?;
        let original_len = transactions.len();
        transactions.retain(|t| &t.id != id);

        if transactions.len() == original_len {
            return Ok(false);
        }

        self.save_all(&transactions)?;
        Ok(true)
    }
}

/// Open the JSON store for the configured data directory
pub fn open_json_store(paths: &TrackerPaths) -> TrackerResult<JsonTransactionStore> {
    paths.ensure_directories()?;
    Ok(JsonTransactionStore::new(paths.transactions_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_json_store_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = open_json_store(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("backups").exists());
        assert_eq!(store.path(), paths.transactions_file());
        assert!(store.load_all().unwrap().is_empty());
    }
}
