//! Transaction model
//!
//! A transaction is a single income or expense entry. Records are built once
//! through [`Transaction::create`] (which validates and normalizes the raw
//! input) and are never modified afterwards.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

pub const AMOUNT_ERROR: &str = "amount must be a positive number";
pub const TYPE_ERROR: &str = "type must be income or expense";
pub const CATEGORY_ERROR: &str = "category must be a non-empty string";
pub const AMOUNT_LIMIT_ERROR: &str = "amount must not exceed 1000000000.00";

/// Largest amount a single transaction may carry
///
/// Summing tens of millions of maximal records still fits in `i64` cents,
/// so totals over any data file that fits in memory cannot overflow.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// Lowercase name as stored on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TrackerError;

    /// Case-insensitive parse of `income` / `expense`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TrackerError::validation(TYPE_ERROR)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, sortable by creation order
    pub id: TransactionId,

    /// Calendar date of the transaction (`YYYY-MM-DD` on disk)
    pub date: NaiveDate,

    /// Positive amount in cents
    pub amount: Money,

    /// Title-cased category label
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Free-form note
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a transaction dated today
    ///
    /// Checks, in order, that the amount is a positive number no larger than
    /// [`MAX_AMOUNT`], that the type
    /// is `income` or `expense` (any case), and that the category is not
    /// blank. The first failing check is reported as a
    /// [`TrackerError::Validation`].
    pub fn create(
        amount: f64,
        category: &str,
        kind: &str,
        description: Option<&str>,
    ) -> TrackerResult<Self> {
        Self::create_on(Local::now().date_naive(), amount, category, kind, description)
    }

    /// Create a transaction with an explicit date
    pub fn create_on(
        date: NaiveDate,
        amount: f64,
        category: &str,
        kind: &str,
        description: Option<&str>,
    ) -> TrackerResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TrackerError::validation(AMOUNT_ERROR));
        }
        if amount > MAX_AMOUNT {
            return Err(TrackerError::validation(AMOUNT_LIMIT_ERROR));
        }

        let kind: TransactionType = kind.parse()?;

        let category = category.trim();
        if category.is_empty() {
            return Err(TrackerError::validation(CATEGORY_ERROR));
        }

        // Sub-cent amounts round down to zero and would break `amount > 0`
        let amount = Money::from_decimal(amount)
            .filter(Money::is_positive)
            .ok_or_else(|| TrackerError::validation(AMOUNT_ERROR))?;

        Ok(Self {
            id: TransactionId::generate(),
            date,
            amount,
            category: title_case(category),
            kind,
            description: description.map(str::trim).unwrap_or_default().to_string(),
        })
    }

    /// Check the invariants of an already-typed record
    pub fn validate(&self) -> TrackerResult<()> {
        if !self.amount.is_positive() {
            return Err(TrackerError::validation("amount must be positive"));
        }
        if self.amount.cents() > MAX_AMOUNT_CENTS {
            return Err(TrackerError::validation(AMOUNT_LIMIT_ERROR));
        }
        if self.category.trim().is_empty() {
            return Err(TrackerError::validation(CATEGORY_ERROR));
        }
        Ok(())
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// Capitalize the first letter of every word and lowercase the rest
///
/// A word is a run of alphabetic characters, so `"o'neil's cafe"` becomes
/// `"O'Neil'S Cafe"` and `"2nd hand"` becomes `"2Nd Hand"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
