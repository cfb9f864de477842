//! In-memory transaction store
//!
//! Holds the collection in a `Vec`; useful for embedding the tracker in
//! another front end and for exercising code that is generic over the store.

use super::TransactionStore;
use crate::error::TrackerResult;
use crate::models::Transaction;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionStore for MemoryStore {
    fn load_all(&self) -> TrackerResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn save_all(&mut self, transactions: &[Transaction]) -> TrackerResult<()> {
        self.transactions = transactions.to_vec();
        Ok(())
    }
}
