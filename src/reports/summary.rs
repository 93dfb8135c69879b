//! Period summary
//!
//! Totals income and expense for a period and derives the balance.

use serde::{Deserialize, Serialize};

use crate::models::{Money, NewTransaction, Period, Transaction, TransactionKind};

/// Positive/negative tag carried by the balance line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
}

/// Income, expense and balance for one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
}

impl Summary {
    /// The three metrics in display order
    pub fn metrics(&self) -> [(&'static str, Money); 3] {
        [
            ("Total Income", self.total_income),
            ("Total Expense", self.total_expense),
            ("Balance", self.balance),
        ]
    }

    /// Positive when the balance is zero or more
    pub fn balance_tone(&self) -> Tone {
        if self.balance.is_negative() {
            Tone::Negative
        } else {
            Tone::Positive
        }
    }
}

/// Sum amounts by kind over the transactions inside `period`
pub fn summarize(transactions: &[Transaction], period: &Period) -> Summary {
    totals(
        transactions
            .iter()
            .filter(|t| period.contains(t.occurred_on))
            .map(|t| (t.kind, t.amount)),
    )
}

/// Totals over records that have not been stored, e.g. the import template
pub fn summarize_records(records: &[NewTransaction]) -> Summary {
    totals(records.iter().map(|r| (r.kind, r.amount)))
}

fn totals(amounts: impl Iterator<Item = (TransactionKind, Money)>) -> Summary {
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for (kind, amount) in amounts {
        match kind {
            TransactionKind::Income => total_income += amount,
            TransactionKind::Expense => total_expense += amount,
        }
    }

    Summary {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{scenario, txn};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_input_is_zero() {
        let summary = summarize(&[], &Period::all());
        assert_eq!(summary, Summary::default());
        assert!(summary.balance.is_zero());
    }

    #[test]
    fn test_month_filter() {
        let all = scenario();
        let summary = summarize(&all, &Period::month_of(2024, 1).unwrap());

        assert_eq!(summary.total_income.amount(), dec!(50000));
        assert_eq!(summary.total_expense.amount(), dec!(15000));
        assert_eq!(summary.balance.amount(), dec!(35000));
    }

    #[test]
    fn test_balance_is_income_minus_expense() {
        let all = scenario();
        for period in [
            Period::all(),
            Period::year(2024),
            Period::year(2023),
            Period::new(None, Some(2)).unwrap(),
        ] {
            let s = summarize(&all, &period);
            assert_eq!(s.balance, s.total_income - s.total_expense);
        }
    }

    #[test]
    fn test_filter_with_no_matches_is_zero() {
        let summary = summarize(&scenario(), &Period::year(1999));
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_balance_tone() {
        let all = scenario();
        assert_eq!(summarize(&all, &Period::all()).balance_tone(), Tone::Positive);

        let february = summarize(&all, &Period::month_of(2024, 2).unwrap());
        assert_eq!(february.balance.amount(), dec!(-8000));
        assert_eq!(february.balance_tone(), Tone::Negative);
    }

    #[test]
    fn test_extreme_amounts_do_not_panic() {
        let all = vec![
            txn(2, TransactionKind::Income, "Legacy", Decimal::MAX, "2024-01-02"),
            txn(1, TransactionKind::Income, "Legacy", Decimal::MAX, "2024-01-01"),
        ];
        let summary = summarize(&all, &Period::all());

        assert_eq!(summary.total_income.amount(), Decimal::MAX);
        assert_eq!(summary.balance.amount(), Decimal::MAX);
    }

    #[test]
    fn test_summarize_records() {
        let records: Vec<_> = scenario().iter().map(|t| t.to_record()).collect();
        assert_eq!(summarize_records(&records), summarize(&scenario(), &Period::all()));
    }

    #[test]
    fn test_metric_labels() {
        let labels: Vec<_> = Summary::default().metrics().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Total Income", "Total Expense", "Balance"]);
    }
}
