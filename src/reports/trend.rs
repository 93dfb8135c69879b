//! Monthly income vs expense trend and other chart-ready tables

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::{Money, Period, Transaction, TransactionKind};

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Month key, "YYYY-MM"
    pub month: String,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Per-month totals over every transaction, oldest month first
///
/// A month with only one kind of transaction reports zero for the other.
pub fn monthly_trend(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let key = (txn.occurred_on.year(), txn.occurred_on.month());
        let entry = months.entry(key).or_default();
        match txn.kind {
            TransactionKind::Income => entry.0 += txn.amount,
            TransactionKind::Expense => entry.1 += txn.amount,
        }
    }

    months
        .into_iter()
        .map(|((year, month), (income, expense))| MonthlyTotals {
            month: format!("{:04}-{:02}", year, month),
            income,
            expense,
        })
        .collect()
}

/// Distinct years present in the data, most recent first
pub fn available_years(transactions: &[Transaction]) -> Vec<i32> {
    let years: BTreeSet<i32> = transactions.iter().map(|t| t.occurred_on.year()).collect();
    years.into_iter().rev().collect()
}

/// The transactions inside `period`, in their original order
pub fn filter_period(transactions: &[Transaction], period: &Period) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| period.contains(t.occurred_on))
        .cloned()
        .collect()
}
