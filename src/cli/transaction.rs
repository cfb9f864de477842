//! Transaction CLI commands
//!
//! Implements `add`, `list`, `show` and `delete`.

use clap::Args;
use tracing::debug;

use crate::analytics::{filter_by_month, parse_month};
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::transaction::AMOUNT_ERROR;
use crate::models::{parse_date, Transaction, TransactionId, TransactionType};
use crate::storage::TransactionStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type (income or expense)
    pub kind: String,
    /// Amount (e.g. "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category (e.g. "Food", "Salary")
    pub category: String,
    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Number of transactions to show (most recent last)
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Only show one month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Only show one type (income or expense)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
}

/// Parse a user-typed amount; anything non-numeric is an invalid amount
pub fn parse_amount(raw: &str) -> TrackerResult<f64> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    cleaned
        .parse::<f64>()
        .map_err(|_| TrackerError::validation(AMOUNT_ERROR))
}

/// Handle `add`
pub fn handle_add<S: TransactionStore>(
    store: &mut S,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<Transaction> {
    let amount = parse_amount(&args.amount)?;
    let description = args.description.as_deref();

    let txn = match args.date {
        Some(date) => Transaction::create_on(
            parse_date(&date)?,
            amount,
            &args.category,
            &args.kind,
            description,
        )?,
        None => Transaction::create(amount, &args.category, &args.kind, description)?,
    };

    store.append(txn.clone())?;
    debug!(id = %txn.id, "added transaction");

    println!("Transaction added successfully! (ID: {})", txn.id);
    print!("{}", format_transaction_details(&txn, &settings.currency_symbol));
    Ok(txn)
}

/// Handle `list`
pub fn handle_list<S: TransactionStore>(
    store: &S,
    settings: &Settings,
    args: ListArgs,
) -> TrackerResult<()> {
    let mut transactions = store.load_all()?;

    if let Some(month) = args.month {
        let (year, month) = parse_month(&month)?;
        transactions = filter_by_month(&transactions, year, month)?;
    }

    if let Some(kind) = args.kind {
        let kind: TransactionType = kind.parse()?;
        transactions.retain(|t| t.kind == kind);
    }

    let total = transactions.len();
    let limit = args.limit.unwrap_or(settings.list_limit);
    let shown = &transactions[total.saturating_sub(limit)..];

    print!("{}", format_transaction_table(shown, &settings.currency_symbol));
    if shown.len() < total {
        println!("Showing {} of {} transactions.", shown.len(), total);
    }

    Ok(())
}

/// Handle `show`
pub fn handle_show<S: TransactionStore>(
    store: &S,
    settings: &Settings,
    id: &str,
) -> TrackerResult<()> {
    let id = TransactionId::new(id.trim());
    let txn = store
        .load_all()?
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| TrackerError::transaction_not_found(id.as_str()))?;

    print!("{}", format_transaction_details(&txn, &settings.currency_symbol));
    Ok(())
}

/// Handle `delete`
pub fn handle_delete<S: TransactionStore>(store: &mut S, id: &str) -> TrackerResult<()> {
    let id = TransactionId::new(id.trim());

    if !store.delete_by_id(&id)? {
        return Err(TrackerError::transaction_not_found(id.as_str()));
    }

    println!("Transaction {} deleted.", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn add_args(kind: &str, amount: &str, category: &str) -> AddArgs {
        AddArgs {
            kind: kind.into(),
            amount: amount.into(),
            category: category.into(),
            description: None,
            date: None,
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount(" $1,200 ").unwrap(), 1200.0);
        assert!(parse_amount("twelve").unwrap_err().is_validation());
    }

    #[test]
    fn test_add_persists() {
        let mut store = MemoryStore::new();
        let txn = handle_add(&mut store, &Settings::default(), add_args("Expense", "12.5", "food"))
            .unwrap();

        assert_eq!(store.load_all().unwrap(), vec![txn]);
    }

    #[test]
    fn test_add_with_date() {
        let mut store = MemoryStore::new();
        let mut args = add_args("income", "100", "salary");
        args.date = Some("2024-03-15".into());

        let txn = handle_add(&mut store, &Settings::default(), args).unwrap();
        assert_eq!(txn.date, parse_date("2024-03-15").unwrap());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut store = MemoryStore::new();
        let settings = Settings::default();

        assert!(handle_add(&mut store, &settings, add_args("expense", "-5", "Food")).is_err());
        assert!(handle_add(&mut store, &settings, add_args("gift", "5", "Food")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut store = MemoryStore::new();
        assert!(handle_delete(&mut store, "nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_show_and_delete() {
        let mut store = MemoryStore::new();
        let settings = Settings::default();
        let txn = handle_add(&mut store, &settings, add_args("expense", "3", "Coffee")).unwrap();

        handle_show(&store, &settings, txn.id.as_str()).unwrap();
        handle_delete(&mut store, txn.id.as_str()).unwrap();
        assert!(handle_show(&store, &settings, txn.id.as_str()).is_err());
    }

    #[test]
    fn test_list_rejects_bad_filters() {
        let store = MemoryStore::new();
        let settings = Settings::default();

        let bad_month = ListArgs {
            limit: None,
            month: Some("2024-13".into()),
            kind: None,
        };
        assert!(handle_list(&store, &settings, bad_month).unwrap_err().is_parse());

        let bad_type = ListArgs {
            limit: None,
            month: None,
            kind: Some("transfer".into()),
        };
        assert!(handle_list(&store, &settings, bad_type).unwrap_err().is_validation());
    }
}
