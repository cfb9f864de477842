//! CLI commands for reports
//!
//! `balance`, `summary` and `spending` load a snapshot from the store and
//! hand it to the aggregation engine.

use chrono::{Datelike, Local};
use clap::Args;

use crate::analytics::{balance, monthly_summary, parse_month, spending_by_category, total_by_type};
use crate::config::Settings;
use crate::display::{format_balance, format_monthly_summary, format_spending};
use crate::error::TrackerResult;
use crate::models::TransactionType;
use crate::storage::TransactionStore;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to summarize (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `spending`
#[derive(Args, Debug)]
pub struct SpendingArgs {
    /// Transaction type to break down
    #[arg(short = 't', long = "type", default_value = "expense")]
    pub kind: String,
}

/// Handle `balance`
pub fn handle_balance<S: TransactionStore>(store: &S, settings: &Settings) -> TrackerResult<()> {
    let transactions = store.load_all()?;

    print!(
        "{}",
        format_balance(
            total_by_type(&transactions, TransactionType::Income),
            total_by_type(&transactions, TransactionType::Expense),
            balance(&transactions),
            &settings.currency_symbol,
        )
    );
    Ok(())
}

/// Handle `summary`
pub fn handle_summary<S: TransactionStore>(
    store: &S,
    settings: &Settings,
    args: SummaryArgs,
) -> TrackerResult<()> {
    let (year, month) = match args.month {
        Some(label) => parse_month(&label)?,
        None => {
            let today = Local::now().date_naive();
            (today.year(), today.month())
        }
    };

    let transactions = store.load_all()?;
    let summary = monthly_summary(&transactions, year, month)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_monthly_summary(&summary, &settings.currency_symbol));
    }
    Ok(())
}

/// Handle `spending`
pub fn handle_spending<S: TransactionStore>(
    store: &S,
    settings: &Settings,
    args: SpendingArgs,
) -> TrackerResult<()> {
    let kind: TransactionType = args.kind.parse()?;
    let transactions = store.load_all()?;
    let breakdown = spending_by_category(&transactions, kind);

    print!("{}", format_spending(&breakdown, kind, &settings.currency_symbol));
    Ok(())
}
