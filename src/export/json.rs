//! JSON export of transactions

use std::io::Write;

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

/// Write all transactions as a pretty-printed JSON array
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    mut writer: W,
) -> TrackerResult<()> {
    serde_json::to_writer_pretty(&mut writer, transactions)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    debug!(count = transactions.len(), "exported transactions as JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::parse_records;

    #[test]
    fn test_export_json_reloads() {
        let txns = vec![
            Transaction::create(1000.0, "Salary", "income", None).unwrap(),
            Transaction::create(9.99, "Snacks", "expense", Some("chips")).unwrap(),
        ];

        let mut buffer = Vec::new();
        export_transactions_json(&txns, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parse_records(value).unwrap(), txns);
    }
}
