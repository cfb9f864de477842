//! Export module for the finance tracker
//!
//! Writes the stored transactions in two formats:
//! - CSV: spreadsheet-compatible, one row per transaction
//! - JSON: the same array layout as the data file, for other tools

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::export_transactions_json;

use std::str::FromStr;

use crate::error::TrackerError;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(TrackerError::Export(format!(
                "Unknown export format '{}', expected csv or json",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }
}
