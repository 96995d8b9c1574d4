//! Turns a list of transactions into income, expense, savings and category totals.
//!
//! Everything here is pure: no I/O and no state kept between calls. Totals are
//! recomputed from the full list every time it changes.

use serde::{Serialize, ser::SerializeMap};

use crate::transaction::Transaction;

/// The figures shown in the summary cards and chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of all positive amounts.
    pub income: f64,
    /// The sum of the magnitudes of all negative amounts.
    pub expenses: f64,
    /// `income - expenses`.
    pub savings: f64,
    /// The sum of the magnitudes of all amounts, grouped by category.
    pub category_totals: CategoryTotals,
}

/// Per-category totals in the order each category was first seen.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals(Vec<(String, f64)>);

impl CategoryTotals {
    /// Add `amount` to the bucket for `category`, creating the bucket if needed.
    fn add(&mut self, category: &str, amount: f64) {
        match self.0.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.0.push((category.to_owned(), amount)),
        }
    }

    /// The total for `category`, or `None` if no transaction used it.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    /// Iterate over `(category, total)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// The number of distinct categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no categories.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (category, total) in &self.0 {
            map.serialize_entry(category, total)?;
        }

        map.end()
    }
}

/// Calculate the income, expenses, savings and category totals of `transactions`.
///
/// Amounts above zero count as income, amounts below zero count as expenses
/// and zero counts as neither. Every transaction, zero included, adds the
/// magnitude of its amount to its category. Sums are plain `f64` additions in
/// list order with no rounding.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = 0.0;
    let mut expenses = 0.0;
    let mut category_totals = CategoryTotals::default();

    for transaction in transactions {
        if transaction.amount > 0.0 {
            income += transaction.amount;
        } else if transaction.amount < 0.0 {
            expenses += transaction.amount.abs();
        }

        category_totals.add(&transaction.category, transaction.amount.abs());
    }

    Summary {
        income,
        expenses,
        savings: income - expenses,
        category_totals,
    }
}
