//! JSON data dump
//!
//! Shared by the JSON and YAML exports.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::reports::Summary;

/// Bumped whenever the dump layout changes
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Every transaction plus the all-time summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub metadata: ExportMetadata,
    pub summary: Summary,
    /// Store order: newest first
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    /// Oldest transaction date (YYYY-MM-DD)
    pub earliest_transaction: Option<String>,
    /// Newest transaction date (YYYY-MM-DD)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn new(transactions: Vec<Transaction>, summary: Summary) -> Self {
        let range = transactions.iter().map(|t| t.occurred_on).fold(
            None,
            |range: Option<(NaiveDate, NaiveDate)>, date| match range {
                None => Some((date, date)),
                Some((lo, hi)) => Some((lo.min(date), hi.max(date))),
            },
        );

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                transaction_count: transactions.len(),
                earliest_transaction: range.map(|(lo, _)| lo.to_string()),
                latest_transaction: range.map(|(_, hi)| hi.to_string()),
            },
            summary,
            transactions,
        }
    }
}

/// Export to JSON
pub fn export_full_json<W: Write>(
    export: &FullExport,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
