//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_transactions_csv, export_transactions_json, ExportFormat};
use crate::storage::TransactionStore;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (csv or json)
    pub format: String,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `export`
pub fn handle_export_command<S: TransactionStore>(store: &S, args: ExportArgs) -> TrackerResult<()> {
    let format: ExportFormat = args.format.parse()?;
    let transactions = store.load_all()?;

    match args.output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                TrackerError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            write_export(format, &transactions, BufWriter::new(file))?;
            eprintln!(
                "Exported {} transaction(s) to: {}",
                transactions.len(),
                output.display()
            );
        }
        None => write_export(format, &transactions, io::stdout().lock())?,
    }

    Ok(())
}

fn write_export<W: Write>(
    format: ExportFormat,
    transactions: &[crate::models::Transaction],
    writer: W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(transactions, writer),
        ExportFormat::Json => export_transactions_json(transactions, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.csv");
        let store = MemoryStore::with_transactions(vec![
            Transaction::create(9.99, "Books", "expense", Some("Paperback")).unwrap(),
        ]);

        handle_export_command(
            &store,
            ExportArgs {
                format: "csv".into(),
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.starts_with("id,date,type,category,amount,description"));
        assert!(contents.contains("expense,Books,9.99,Paperback"));
    }

    #[test]
    fn test_unknown_format() {
        let store = MemoryStore::new();
        let result = handle_export_command(
            &store,
            ExportArgs {
                format: "xml".into(),
                output: None,
            },
        );
        assert!(matches!(result, Err(TrackerError::Export(_))));
    }
}
