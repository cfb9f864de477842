//! Totals and balance over a set of transactions

use crate::models::{Money, Transaction, TransactionType};

/// Sum of the amounts of all transactions of the given type
///
/// Returns zero when nothing matches. Amounts are normalized to whole cents
/// when a record is created or loaded, so this sums already-rounded values.
pub fn total_by_type(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Total income minus total expense
pub fn balance(transactions: &[Transaction]) -> Money {
    total_by_type(transactions, TransactionType::Income)
        - total_by_type(transactions, TransactionType::Expense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::sample_transactions;

    #[test]
    fn test_empty_totals() {
        assert_eq!(total_by_type(&[], TransactionType::Income), Money::zero());
        assert_eq!(balance(&[]), Money::zero());
    }

    #[test]
    fn test_totals_by_type() {
        let txns = sample_transactions();
        assert_eq!(
            total_by_type(&txns, TransactionType::Income),
            Money::from_cents(100_000)
        );
        assert_eq!(
            total_by_type(&txns, TransactionType::Expense),
            Money::from_cents(10_000)
        );
    }

    #[test]
    fn test_balance() {
        let txns = sample_transactions();
        assert_eq!(balance(&txns), Money::from_cents(90_000));
    }

    #[test]
    fn test_negative_balance() {
        let txns: Vec<_> = sample_transactions()
            .into_iter()
            .filter(Transaction::is_expense)
            .collect();
        assert_eq!(balance(&txns), Money::from_cents(-10_000));
    }

    #[test]
    fn test_loaded_amounts_are_rounded_before_summing() {
        let record = |id: &str| {
            serde_json::json!({
                "id": id,
                "date": "2024-03-15",
                "amount": 0.125,
                "category": "Fees",
                "type": "expense"
            })
        };
        let txns = vec![
            crate::models::transaction_from_record(record("1")).unwrap(),
            crate::models::transaction_from_record(record("2")).unwrap(),
        ];

        // Each 0.125 becomes 0.12 at load, so the total is 0.24
        assert_eq!(
            total_by_type(&txns, TransactionType::Expense),
            Money::from_cents(24)
        );
    }
}
