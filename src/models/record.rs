//! Validation of loosely-shaped records at the storage boundary
//!
//! Data files are plain JSON and may be edited by hand, so every record read
//! from disk is checked here before it becomes a typed [`Transaction`].

use chrono::NaiveDate;
use serde_json::Value;

use super::transaction::{Transaction, AMOUNT_LIMIT_ERROR, MAX_AMOUNT};
use crate::error::{TrackerError, TrackerResult};

/// Fields that every stored record must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "date", "amount", "category", "type"];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that a raw record has the shape of a transaction
///
/// Reports the first problem found: a missing field (checked in
/// [`REQUIRED_FIELDS`] order), then an unknown type, then an amount that is
/// not positive or exceeds [`MAX_AMOUNT`]. Errors are not accumulated.
pub fn validate_record(record: &Value) -> TrackerResult<()> {
    let fields = record
        .as_object()
        .ok_or_else(|| TrackerError::validation("record must be an object"))?;

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(TrackerError::validation(format!("missing field: {}", missing)));
    }

    match fields["type"].as_str() {
        Some("income") | Some("expense") => {}
        _ => return Err(TrackerError::validation("invalid type")),
    }

    match fields["amount"].as_f64() {
        Some(amount) if amount > MAX_AMOUNT => {
            return Err(TrackerError::validation(AMOUNT_LIMIT_ERROR));
        }
        Some(amount) if amount > 0.0 => {}
        _ => return Err(TrackerError::validation("amount must be positive")),
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(value: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| TrackerError::Parse {
        field: "date",
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Turn a raw record into a typed transaction
///
/// Runs [`validate_record`], parses the date (a malformed one is a
/// [`TrackerError::Parse`]) and finally checks the typed invariants.
pub fn transaction_from_record(record: Value) -> TrackerResult<Transaction> {
    validate_record(&record)?;

    let date = record["date"].as_str().ok_or_else(|| TrackerError::Parse {
        field: "date",
        value: record["date"].to_string(),
        reason: "expected a YYYY-MM-DD string".into(),
    })?;
    parse_date(date)?;

    let txn: Transaction = serde_json::from_value(record)
        .map_err(|e| TrackerError::CorruptData(format!("Malformed transaction record: {}", e)))?;
    txn.validate()?;

    Ok(txn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "240315101500000001",
            "date": "2024-03-15",
            "amount": 50.0,
            "category": "Food",
            "type": "expense",
            "description": "Lunch"
        })
    }

    #[test]
    fn test_valid_record() {
        assert!(validate_record(&sample()).is_ok());
    }

    #[test]
    fn test_created_transaction_is_valid_record() {
        let txn = Transaction::create(100.0, "Salary", "income", None).unwrap();
        let value = serde_json::to_value(&txn).unwrap();
        assert!(validate_record(&value).is_ok());
    }

    #[test]
    fn test_missing_field_named_in_order() {
        let mut record = sample();
        record.as_object_mut().unwrap().remove("amount");
        record.as_object_mut().unwrap().remove("type");

        let err = validate_record(&record).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: missing field: amount");
    }

    #[test]
    fn test_description_is_optional() {
        let mut record = sample();
        record.as_object_mut().unwrap().remove("description");

        let txn = transaction_from_record(record).unwrap();
        assert_eq!(txn.description, "");
    }

    #[test]
    fn test_invalid_type() {
        let mut record = sample();
        record["type"] = json!("Expense");
        let err = validate_record(&record).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: invalid type");
    }

    #[test]
    fn test_amount_above_maximum() {
        let mut record = sample();
        record["amount"] = json!(5e16);

        let err = validate_record(&record).unwrap_err();
        assert_eq!(err.to_string(), format!("Validation error: {}", AMOUNT_LIMIT_ERROR));
        assert!(transaction_from_record(record).unwrap_err().is_validation());
    }

    #[test]
    fn test_non_positive_amount() {
        for amount in [json!(0), json!(-5.5), json!("50")] {
            let mut record = sample();
            record["amount"] = amount;
            let err = validate_record(&record).unwrap_err();
            assert_eq!(err.to_string(), "Validation error: amount must be positive");
        }
    }

    #[test]
    fn test_non_object_record() {
        assert!(validate_record(&json!([1, 2, 3])).unwrap_err().is_validation());
    }

    #[test]
    fn test_malformed_date_is_parse_error() {
        let mut record = sample();
        record["date"] = json!("15/03/2024");
        assert!(transaction_from_record(record).unwrap_err().is_parse());
    }

    #[test]
    fn test_transaction_from_record() {
        let txn = transaction_from_record(sample()).unwrap();
        assert_eq!(txn.amount, Money::from_cents(5000));
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }
}
