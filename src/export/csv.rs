//! CSV export of transactions

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

const HEADER: [&str; 6] = ["id", "date", "type", "category", "amount", "description"];

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    date: String,
    kind: &'a str,
    category: &'a str,
    amount: String,
    description: &'a str,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.as_str(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.as_str(),
            category: &txn.category,
            amount: format!("{:.2}", txn.amount.to_decimal()),
            description: &txn.description,
        }
    }
}

/// Write all transactions as CSV, header first
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<()> {
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for txn in transactions {
        wtr.serialize(CsvRow::from(txn))
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    wtr.flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    debug!(count = transactions.len(), "exported transactions as CSV");
    Ok(())
}
