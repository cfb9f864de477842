//! Display formatting for terminal output
//!
//! Turns transactions and analytics results into plain strings; printing is
//! left to the CLI handlers.

pub mod report;
pub mod transaction;

pub use report::{format_balance, format_monthly_summary, format_spending};
pub use transaction::{format_transaction_details, format_transaction_table};
