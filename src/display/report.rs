//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers for summaries, category breakdowns and the
//! monthly trend.

use crate::models::Money;
use crate::reports::{breakdown_total, CategoryAmount, MonthlyTotals, Summary, Tone};
use crate::services::Dashboard;

const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Income, expense and balance lines; the balance is coloured by its tone
pub fn format_summary(summary: &Summary, currency: &str, color: bool) -> String {
    let mut output = String::new();

    for (label, value) in summary.metrics() {
        let text = if label == "Balance" && color {
            match summary.balance_tone() {
                Tone::Positive => format!("\x1b[32m{}\x1b[0m", value.format_with_code(currency)),
                Tone::Negative => format!("\x1b[31m{}\x1b[0m", value.format_with_code(currency)),
            }
        } else {
            value.format_with_code(currency)
        };
        output.push_str(&format!("{:<14} {:>20}\n", format!("{}:", label), text));
    }

    output
}

/// Category rows with share of total and a bar
pub fn format_breakdown(title: &str, rows: &[CategoryAmount], currency: &str) -> String {
    let mut output = format!("{}\n{}\n", title, separator(60));

    if rows.is_empty() {
        output.push_str("No category data available.\n");
        return output;
    }

    let total = breakdown_total(rows);
    let max = rows
        .iter()
        .filter_map(|r| r.amount.to_f64())
        .fold(0.0_f64, f64::max);
    let name_width = rows
        .iter()
        .map(|r| r.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    for row in rows {
        output.push_str(&format!(
            "{:<name_width$}  {:>18}  {:>5}  {}\n",
            row.category,
            row.amount.format_with_code(currency),
            format_percentage(row.percentage_of(total)),
            format_bar(row.amount.to_f64().unwrap_or(0.0), max, BAR_WIDTH),
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:<name_width$}  {:>18}\n",
        "Total",
        total.format_with_code(currency),
        name_width = name_width,
    ));
    output
}

/// Month-by-month income and expense
pub fn format_trend(trend: &[MonthlyTotals], currency: &str) -> String {
    if trend.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = format!(
        "{:<8}  {:>18}  {:>18}  {:>18}\n{}\n",
        "Month",
        "Income",
        "Expense",
        "Net",
        separator(68)
    );

    for month in trend {
        output.push_str(&format!(
            "{:<8}  {:>18}  {:>18}  {:>18}\n",
            month.month,
            month.income.format_with_code(currency),
            month.expense.format_with_code(currency),
            month.net().format_with_code(currency),
        ));
    }

    output
}

/// Full dashboard: summary, both breakdowns and the available years
pub fn format_dashboard(dashboard: &Dashboard, currency: &str, color: bool) -> String {
    let mut output = format!(
        "Financial Summary - {}\n{}\n",
        dashboard.period.label(),
        separator(40)
    );
    output.push_str(&format_summary(&dashboard.summary, currency, color));
    output.push_str(&format!("Transactions:  {}\n\n", dashboard.transaction_count));
    output.push_str(&format_breakdown(
        "Expense Categories",
        &dashboard.expense_breakdown,
        currency,
    ));
    output.push('\n');
    output.push_str(&format_breakdown(
        "Income Categories",
        &dashboard.income_breakdown,
        currency,
    ));

    if !dashboard.years.is_empty() {
        let years: Vec<String> = dashboard.years.iter().map(|y| y.to_string()).collect();
        output.push_str(&format!("\nYears with data: {}\n", years.join(", ")));
    }

    output
}
