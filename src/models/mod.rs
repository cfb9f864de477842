//! Core data models for the finance tracker
//!
//! The only entity is the [`Transaction`]; the remaining types give its
//! fields a precise meaning (integer-cent amounts, timestamp IDs).

pub mod ids;
pub mod money;
pub mod record;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use record::{parse_date, transaction_from_record, validate_record};
pub use transaction::{title_case, Transaction, TransactionType};
