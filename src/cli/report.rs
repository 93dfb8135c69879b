//! Report CLI commands
//!
//! `summary`, `breakdown` and `trend`.

use super::{use_color, PeriodArgs};
use crate::display::{format_breakdown, format_dashboard, format_trend};
use crate::error::TrackerResult;
use crate::models::{Period, TransactionKind};
use crate::services::{ReportService, ServiceContext};

fn currency_or_default<'a>(context: &'a ServiceContext, currency: &'a Option<String>) -> &'a str {
    currency.as_deref().unwrap_or_else(|| context.default_currency())
}

/// Handle `summary`
pub fn handle_summary_command(
    context: &ServiceContext,
    period: &PeriodArgs,
    currency: Option<String>,
) -> TrackerResult<()> {
    let period = period.period()?;
    let dashboard = ReportService::new(context).dashboard(&period)?;
    let currency = currency_or_default(context, &currency);

    print!("{}", format_dashboard(&dashboard, currency, use_color()));
    Ok(())
}

/// Handle `breakdown`
pub fn handle_breakdown_command(
    context: &ServiceContext,
    period: &PeriodArgs,
    kind: &str,
    currency: Option<String>,
) -> TrackerResult<()> {
    let kind: TransactionKind = kind.parse()?;
    let period = period.period()?;
    let dashboard = ReportService::new(context).dashboard(&period)?;
    let currency = currency_or_default(context, &currency);

    let (title, rows) = match kind {
        TransactionKind::Expense => ("Expense Categories", &dashboard.expense_breakdown),
        TransactionKind::Income => ("Income Categories", &dashboard.income_breakdown),
    };
    print!(
        "{}",
        format_breakdown(&format!("{} - {}", title, period.label()), rows, currency)
    );
    Ok(())
}

/// Handle `trend`
pub fn handle_trend_command(context: &ServiceContext, currency: Option<String>) -> TrackerResult<()> {
    let dashboard = ReportService::new(context).dashboard(&Period::all())?;
    let currency = currency_or_default(context, &currency);

    println!("Monthly Trend");
    print!("{}", format_trend(&dashboard.trend, currency));
    Ok(())
}
