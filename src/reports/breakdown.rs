//! Category breakdown
//!
//! Groups one kind of transaction by category for a period. Largest amounts
//! come first; equal amounts are ordered by category name so the output is
//! deterministic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Money, Period, Transaction, TransactionKind};

/// Total amount for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Money,
}

impl CategoryAmount {
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Share of `total` as a percentage (0 when total is zero)
    pub fn percentage_of(&self, total: Money) -> f64 {
        match (self.amount.to_f64(), total.to_f64()) {
            (Some(part), Some(whole)) if whole != 0.0 => part / whole * 100.0,
            _ => 0.0,
        }
    }
}

/// Sum amounts per category for `kind` inside `period`
pub fn breakdown_by_category(
    transactions: &[Transaction],
    period: &Period,
    kind: TransactionKind,
) -> Vec<CategoryAmount> {
    let mut totals: HashMap<&str, Money> = HashMap::new();

    for txn in transactions
        .iter()
        .filter(|t| t.kind == kind && period.contains(t.occurred_on))
    {
        *totals.entry(txn.category.as_str()).or_default() += txn.amount;
    }

    let mut rows: Vec<CategoryAmount> = totals
        .into_iter()
        .map(|(category, amount)| CategoryAmount::new(category, amount))
        .collect();

    rows.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

/// Sum of all rows of a breakdown
pub fn breakdown_total(rows: &[CategoryAmount]) -> Money {
    rows.iter().map(|r| r.amount).sum()
}
