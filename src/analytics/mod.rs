//! Aggregation engine
//!
//! Pure functions over slices of [`Transaction`](crate::models::Transaction)s:
//! totals, balance, per-category grouping, per-month filtering and
//! summaries. Nothing here performs I/O or mutates its input.

pub mod category;
pub mod monthly;
pub mod totals;

pub use category::{group_by_category, spending_by_category, CategoryBreakdown, CategoryTotals};
pub use monthly::{filter_by_month, monthly_summary, parse_month, MonthlySummary};
pub use totals::{balance, total_by_type};
