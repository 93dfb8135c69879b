//! Sample import template

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Money, NewTransaction, TransactionKind};

pub const TEMPLATE_FILE_NAME: &str = "budget_template.xlsx";

/// Four example rows dated `today`, one per common case
pub fn template_records(today: NaiveDate) -> Vec<NewTransaction> {
    let row = |kind, category: &str, amount: i64, notes: &str| {
        NewTransaction::new(
            kind,
            category,
            Money::from_decimal(Decimal::from(amount)),
            "PKR",
            today,
        )
        .with_notes(notes)
    };

    vec![
        row(TransactionKind::Income, "Salary", 50000, "Monthly salary"),
        row(TransactionKind::Expense, "Groceries", 8000, "Weekly groceries"),
        row(TransactionKind::Expense, "Rent", 15000, "Monthly rent"),
        row(TransactionKind::Income, "Freelance", 20000, "Project payment"),
    ]
}
