//! Per-category grouping
//!
//! Groups transactions by their stored category label and keeps the
//! categories in the order they were first seen.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{Money, Transaction, TransactionType};

/// Running total and number of transactions for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct CategoryTotals {
    pub total: Money,
    pub count: usize,
}

impl CategoryTotals {
    /// Share of `grand_total` taken by this category, in percent
    pub fn percentage_of(&self, grand_total: Money) -> f64 {
        if grand_total.is_zero() {
            0.0
        } else {
            (self.total.cents() as f64 / grand_total.cents() as f64) * 100.0
        }
    }
}

/// Ordered mapping of category label to its totals
///
/// Serializes as a JSON object whose keys keep this ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBreakdown {
    entries: Vec<(String, CategoryTotals)>,
}

impl CategoryBreakdown {
    /// Totals for a category (exact, case-sensitive match)
    pub fn get(&self, category: &str) -> Option<&CategoryTotals> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, totals)| totals)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryTotals)> {
        self.entries.iter().map(|(name, totals)| (name.as_str(), totals))
    }

    /// Category labels in order
    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all category totals
    pub fn grand_total(&self) -> Money {
        self.entries.iter().map(|(_, totals)| totals.total).sum()
    }

    /// Reorder by total, largest first; ties keep their current order
    pub fn sort_by_total_desc(&mut self) {
        self.entries.sort_by(|a, b| b.1.total.cmp(&a.1.total));
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, totals) in &self.entries {
            map.serialize_entry(name, totals)?;
        }
        map.end()
    }
}

/// Group transactions by category with running totals and counts
///
/// The running total is kept in whole cents, so rounding after every
/// addition and rounding once at the end give the same result.
pub fn group_by_category(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut entries: Vec<(String, CategoryTotals)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions {
        let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
            entries.push((txn.category.clone(), CategoryTotals::default()));
            entries.len() - 1
        });

        let totals = &mut entries[slot].1;
        totals.total += txn.amount;
        totals.count += 1;
    }

    CategoryBreakdown { entries }
}

/// Breakdown of one transaction type, largest category first
pub fn spending_by_category(
    transactions: &[Transaction],
    kind: TransactionType,
) -> CategoryBreakdown {
    let filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.kind == kind)
        .cloned()
        .collect();

    let mut breakdown = group_by_category(&filtered);
    breakdown.sort_by_total_desc();
    breakdown
}
