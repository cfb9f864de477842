//! JSON file store for transactions
//!
//! The data file is a pretty-printed JSON array of transaction objects.
//! Every load re-validates each record, so a hand-edited file cannot smuggle
//! an invalid transaction into the aggregation engine.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use super::file_io::{read_json_value, write_json_atomic};
use super::TransactionStore;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{transaction_from_record, Transaction};

/// Store backed by a single JSON file at an injected path
#[derive(Debug, Clone)]
pub struct JsonTransactionStore {
    path: PathBuf,
}

impl JsonTransactionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Validate and type every record of a raw JSON document
///
/// The document must be an array; the position of a bad record is included
/// in the error message.
pub fn parse_records(document: Value) -> TrackerResult<Vec<Transaction>> {
    let Value::Array(records) = document else {
        return Err(TrackerError::CorruptData(
            "expected a JSON array of transactions".into(),
        ));
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            transaction_from_record(record).map_err(|e| match e {
                TrackerError::Validation(msg) => {
                    TrackerError::CorruptData(format!("record {}: {}", index, msg))
                }
                other => other,
            })
        })
        .collect()
}

impl TransactionStore for JsonTransactionStore {
    fn load_all(&self) -> TrackerResult<Vec<Transaction>> {
        let transactions = match read_json_value(&self.path)? {
            Some(document) => parse_records(document)?,
            None => Vec::new(),
        };

        debug!(count = transactions.len(), path = %self.path.display(), "loaded transactions");
        Ok(transactions)
    }

    fn save_all(&mut self, transactions: &[Transaction]) -> TrackerResult<()> {
        write_json_atomic(&self.path, &transactions)?;
        info!(count = transactions.len(), "saved transactions");
        Ok(())
    }
}
