//! finance-tracker - personal income and expense tracking
//!
//! This library provides the core functionality behind the `fintrack`
//! binary: validated transaction records, a persistent JSON store, and
//! pure aggregation functions for balances, monthly summaries and
//! per-category breakdowns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Transaction records, money and identifiers
//! - `storage`: The `TransactionStore` trait and its JSON and in-memory stores
//! - `analytics`: Totals, category grouping and monthly summaries
//! - `config`: Path resolution and user settings
//! - `backup`: Timestamped archives of the data file
//! - `export`: CSV and JSON export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//! - `logging`: tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::analytics::monthly_summary;
//! use finance_tracker::config::TrackerPaths;
//! use finance_tracker::models::Transaction;
//! use finance_tracker::storage::{open_json_store, TransactionStore};
//!
//! let paths = TrackerPaths::new()?;
//! let mut store = open_json_store(&paths)?;
//! store.append(Transaction::create(12.5, "food", "expense", None)?)?;
//!
//! let summary = monthly_summary(&store.load_all()?, 2024, 3)?;
//! println!("{}", summary.balance);
//! ```

pub mod analytics;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
