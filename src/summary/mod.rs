//! Income, expense, savings and per-category totals over all transactions.

mod aggregation;
mod endpoint;

pub use aggregation::{CategoryTotals, Summary, summarize};
pub use endpoint::get_summary_endpoint;
