//! Transaction display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            category: truncate(&txn.category, 20),
            amount: txn.amount.format_with_symbol(symbol),
            description: truncate(&txn.description, 30),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|t| TransactionRow::new(t, symbol));
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .modify(Columns::single(4), Alignment::right());

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn sample() -> Transaction {
        Transaction::create_on(
            parse_date("2024-03-15").unwrap(),
            50.0,
            "food",
            "expense",
            Some("Lunch"),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[], "$"), "No transactions found.\n");
    }

    #[test]
    fn test_table_contains_fields() {
        let txn = sample();
        let table = format_transaction_table(std::slice::from_ref(&txn), "$");

        assert!(table.contains("Category"));
        assert!(table.contains(txn.id.as_str()));
        assert!(table.contains("2024-03-15"));
        assert!(table.contains("Food"));
        assert!(table.contains("$50.00"));
    }

    #[test]
    fn test_details() {
        let details = format_transaction_details(&sample(), "€");
        assert!(details.contains("Amount:      €50.00"));
        assert!(details.contains("Description: Lunch"));
        assert!(details.contains("Type:        expense"));
    }
}
