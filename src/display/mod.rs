//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and reports for terminal
//! display, including tables, colors and simple bar charts.

pub mod report;
pub mod transaction;

pub use report::{format_breakdown, format_dashboard, format_summary, format_trend};
pub use transaction::{format_import_preview, format_transaction_details, format_transaction_list};
