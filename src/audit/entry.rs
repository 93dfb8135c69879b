//! Audit entry data structures
//!
//! Defines the operation types and the entry format itself.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::Transaction;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A single transaction was added
    Create,
    /// A file of transactions was imported
    Import,
    /// A report or data file was written
    Export,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Import => write!(f, "IMPORT"),
            Operation::Export => write!(f, "EXPORT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected transaction, for single-row operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    /// Human-readable description of what happened
    pub summary: String,

    /// Structured detail (the created transaction, import counts, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(operation: Operation, summary: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_id: None,
            summary,
            details: None,
        }
    }

    /// Entry for a transaction added by hand
    pub fn created(transaction: &Transaction) -> Self {
        Self {
            entity_id: Some(transaction.id().to_string()),
            details: serde_json::to_value(transaction).ok(),
            ..Self::new(Operation::Create, transaction.to_string())
        }
    }

    /// Entry for a bulk import of `count` rows from `source`
    pub fn imported(count: usize, source: &Path) -> Self {
        Self {
            details: Some(json!({
                "count": count,
                "source": source.display().to_string(),
            })),
            ..Self::new(
                Operation::Import,
                format!("Imported {} transactions from {}", count, source.display()),
            )
        }
    }

    /// Entry for an export of `kind` (xlsx, pdf, ...) written to `target`
    pub fn exported(kind: &str, target: &Path, transaction_count: usize) -> Self {
        Self {
            details: Some(json!({
                "format": kind,
                "path": target.display().to_string(),
                "transactions": transaction_count,
            })),
            ..Self::new(
                Operation::Export,
                format!("Exported {} to {}", kind, target.display()),
            )
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
        );

        if let Some(id) = &self.entity_id {
            output.push_str(&format!(" {}", id));
        }

        output.push_str(&format!(" {}", self.summary));
        output
    }
}
