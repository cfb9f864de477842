//! Report formatting utilities for terminal output
//!
//! Renders balances, monthly summaries and category breakdowns.

use crate::analytics::{CategoryBreakdown, MonthlySummary};
use crate::models::{Money, TransactionType};

const REPORT_WIDTH: usize = 50;
const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Income, expense and balance block
pub fn format_balance(income: Money, expense: Money, balance: Money, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}{:>15}\n",
        "Income:",
        income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<10}{:>15}\n",
        "Expense:",
        expense.format_with_symbol(symbol)
    ));
    output.push_str(&separator(25));
    output.push('\n');
    output.push_str(&format!(
        "{:<10}{:>15}\n",
        "Balance:",
        balance.format_with_symbol(symbol)
    ));
    output
}

/// Full monthly summary with its category breakdown
pub fn format_monthly_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("Monthly Summary: {}\n", summary.month));
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_balance(
        summary.income,
        summary.expense,
        summary.balance,
        symbol,
    ));
    output.push_str(&format!("Transactions: {}\n", summary.transaction_count));

    if !summary.categories.is_empty() {
        output.push('\n');
        output.push_str("By category:\n");
        for (category, totals) in summary.categories.iter() {
            output.push_str(&format!(
                "  {:<22}{:>14}  ({} txn)\n",
                truncate(category, 22),
                totals.total.format_with_symbol(symbol),
                totals.count
            ));
        }
    }

    output
}

/// Sorted category breakdown with shares and bars
pub fn format_spending(breakdown: &CategoryBreakdown, kind: TransactionType, symbol: &str) -> String {
    let heading = match kind {
        TransactionType::Expense => "Spending by Category",
        TransactionType::Income => "Income by Category",
    };

    if breakdown.is_empty() {
        return format!("No {} transactions found.\n", kind);
    }

    let grand_total = breakdown.grand_total();
    let max = breakdown
        .iter()
        .map(|(_, totals)| totals.total.cents())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    output.push_str(heading);
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH + BAR_WIDTH));
    output.push('\n');

    for (category, totals) in breakdown.iter() {
        output.push_str(&format!(
            "{:<20}{:>14}{:>8}  {}\n",
            truncate(category, 20),
            totals.total.format_with_symbol(symbol),
            format_percentage(totals.percentage_of(grand_total)),
            format_bar(totals.total.cents() as f64, max, BAR_WIDTH)
        ));
    }

    output.push_str(&separator(REPORT_WIDTH + BAR_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<20}{:>14}\n",
        "Total",
        grand_total.format_with_symbol(symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{monthly_summary, spending_by_category};
    use crate::models::{parse_date, Transaction};

    fn sample() -> Vec<Transaction> {
        [
            ("2024-03-01", 1000.0, "Salary", "income"),
            ("2024-03-05", 75.0, "Food", "expense"),
            ("2024-03-09", 25.0, "Transport", "expense"),
        ]
        .iter()
        .map(|(date, amount, category, kind)| {
            Transaction::create_on(parse_date(date).unwrap(), *amount, category, kind, None)
                .unwrap()
        })
        .collect()
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.55), "5.5%");
        assert_eq!(format_percentage(75.0), "75%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Groceries", 20), "Groceries");
        assert_eq!(truncate("A very long category name", 10), "A very ...");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_monthly_summary_output() {
        let summary = monthly_summary(&sample(), 2024, 3).unwrap();
        let output = format_monthly_summary(&summary, "$");

        assert!(output.contains("Monthly Summary: 2024-03"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("$900.00"));
        assert!(output.contains("Transactions: 3"));
        assert!(output.contains("Food"));
    }

    #[test]
    fn test_spending_output() {
        let breakdown = spending_by_category(&sample(), TransactionType::Expense);
        let output = format_spending(&breakdown, TransactionType::Expense, "$");

        assert!(output.starts_with("Spending by Category"));
        let food = output.find("Food").unwrap();
        let transport = output.find("Transport").unwrap();
        assert!(food < transport);
        assert!(output.contains("75%"));
        assert!(output.contains("$100.00"));
    }

    #[test]
    fn test_spending_empty() {
        let output = format_spending(&CategoryBreakdown::default(), TransactionType::Income, "$");
        assert_eq!(output, "No income transactions found.\n");
    }
}
