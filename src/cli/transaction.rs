//! Transaction CLI commands
//!
//! Implements `add` and `list`.

use chrono::NaiveDate;
use clap::Args;

use super::PeriodArgs;
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, NewTransaction, TransactionKind};
use crate::services::{ServiceContext, TransactionService};

/// Arguments of `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type: income or expense
    pub kind: String,

    /// Amount, always positive (e.g. "1500" or "99.95")
    pub amount: String,

    /// Category name (defaults to "General")
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Currency label (defaults to the configured currency)
    #[arg(long)]
    pub currency: Option<String>,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Free-text notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

/// Handle `add`
pub fn handle_add_command(
    context: &ServiceContext,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let kind: TransactionKind = args.kind.parse()?;

    let amount = Money::parse(&args.amount).map_err(|e| {
        TrackerError::invalid_input(format!(
            "Invalid amount format: '{}'. Use format like '1500' or '99.95'. Error: {}",
            args.amount, e
        ))
    })?;
    if !amount.is_positive() {
        return Err(TrackerError::invalid_input(
            "Amount must be greater than zero",
        ));
    }

    let currency = args
        .currency
        .unwrap_or_else(|| settings.default_currency.clone());
    if !settings.is_known_currency(&currency) {
        return Err(TrackerError::invalid_input(format!(
            "Unknown currency '{}'. Configured currencies: {}",
            currency,
            settings.currencies.join(", ")
        )));
    }

    let date = match args.date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            TrackerError::invalid_input(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        })?,
        None => chrono::Local::now().date_naive(),
    };

    let mut record = NewTransaction::new(kind, &args.category, amount, currency, date);
    if let Some(notes) = args.notes {
        record = record.with_notes(notes);
    }

    let txn = TransactionService::new(context).add(record)?;
    println!("Transaction added successfully!");
    print!("{}", format_transaction_details(&txn));
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    context: &ServiceContext,
    period: &PeriodArgs,
    limit: Option<usize>,
) -> TrackerResult<()> {
    let period = period.period()?;
    let mut transactions = TransactionService::new(context).list(&period)?;
    if let Some(limit) = limit {
        transactions.truncate(limit);
    }

    println!("Transactions - {}", period.label());
    println!("{}", format_transaction_list(&transactions));
    Ok(())
}
