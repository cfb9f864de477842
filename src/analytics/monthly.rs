//! Month filtering and monthly summaries

use chrono::Datelike;
use serde::Serialize;

use super::category::{group_by_category, CategoryBreakdown};
use super::totals::{balance, total_by_type};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionType};

/// Totals for a single calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// Month label, `YYYY-MM`
    pub month: String,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
    pub categories: CategoryBreakdown,
    pub transaction_count: usize,
}

fn check_month(month: u32) -> TrackerResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(TrackerError::validation(format!(
            "month must be between 1 and 12, got {}",
            month
        )))
    }
}

/// Transactions dated in the given year and month, in their original order
pub fn filter_by_month(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> TrackerResult<Vec<Transaction>> {
    check_month(month)?;

    Ok(transactions
        .iter()
        .filter(|t| t.date.year() == year && t.date.month() == month)
        .cloned()
        .collect())
}

/// Income, expense, balance and category breakdown for one month
pub fn monthly_summary(
    transactions: &[Transaction],
    year: i32,
    month: u32,
) -> TrackerResult<MonthlySummary> {
    let monthly = filter_by_month(transactions, year, month)?;

    Ok(MonthlySummary {
        month: format!("{}-{:02}", year, month),
        income: total_by_type(&monthly, TransactionType::Income),
        expense: total_by_type(&monthly, TransactionType::Expense),
        balance: balance(&monthly),
        categories: group_by_category(&monthly),
        transaction_count: monthly.len(),
    })
}

/// Parse a `YYYY-MM` month label into `(year, month)`
pub fn parse_month(label: &str) -> TrackerResult<(i32, u32)> {
    let parse_err = |reason: &str| TrackerError::Parse {
        field: "month",
        value: label.to_string(),
        reason: reason.to_string(),
    };

    let (year, month) = label
        .trim()
        .split_once('-')
        .ok_or_else(|| parse_err("expected YYYY-MM"))?;

    let year: i32 = year.parse().map_err(|_| parse_err("invalid year"))?;
    let month: u32 = month.parse().map_err(|_| parse_err("invalid month"))?;
    if !(1..=12).contains(&month) {
        return Err(parse_err("month must be between 1 and 12"));
    }

    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{sample_transactions, txn};

    #[test]
    fn test_filter_by_month() {
        let txns = vec![
            txn("2024-03-15", 10.0, "Food", "expense"),
            txn("2024-04-01", 20.0, "Food", "expense"),
            txn("2023-03-20", 30.0, "Food", "expense"),
            txn("2024-03-31", 40.0, "Rent", "expense"),
        ];

        let march = filter_by_month(&txns, 2024, 3).unwrap();
        assert_eq!(march.len(), 2);
        assert_eq!(march[0], txns[0]);
        assert_eq!(march[1], txns[3]);

        let april = filter_by_month(&txns, 2024, 4).unwrap();
        assert_eq!(april.len(), 1);
        assert!(!april.contains(&txns[0]));
    }

    #[test]
    fn test_filter_rejects_bad_month() {
        assert!(filter_by_month(&[], 2024, 0).unwrap_err().is_validation());
        assert!(filter_by_month(&[], 2024, 13).unwrap_err().is_validation());
    }

    #[test]
    fn test_monthly_summary() {
        let mut txns = sample_transactions();
        txns.push(txn("2024-02-10", 999.0, "Food", "expense"));

        let summary = monthly_summary(&txns, 2024, 3).unwrap();
        assert_eq!(summary.month, "2024-03");
        assert_eq!(summary.income, Money::from_cents(100_000));
        assert_eq!(summary.expense, Money::from_cents(10_000));
        assert_eq!(summary.balance, Money::from_cents(90_000));
        assert_eq!(summary.transaction_count, 4);
        assert_eq!(summary.categories.get("Food").unwrap().count, 2);
    }

    #[test]
    fn test_empty_month_summary() {
        let summary = monthly_summary(&sample_transactions(), 2024, 1).unwrap();
        assert_eq!(summary.month, "2024-01");
        assert_eq!(summary.balance, Money::zero());
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = monthly_summary(&sample_transactions(), 2024, 3).unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["month"], "2024-03");
        assert_eq!(value["balance"], 900.0);
        assert_eq!(value["transaction_count"], 4);
        assert_eq!(value["categories"]["Transport"]["count"], 1);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 3));
        assert_eq!(parse_month("2024-12").unwrap(), (2024, 12));
        assert!(parse_month("2024-13").unwrap_err().is_parse());
        assert!(parse_month("March").unwrap_err().is_parse());
    }
}
