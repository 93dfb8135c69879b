//! Transaction model
//!
//! Represents a single income or expense entry. Transactions are flat: no
//! splits, transfers or links between rows. A [`NewTransaction`] becomes a
//! [`Transaction`] once the store has assigned it an id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{TrackerError, ValidationError};

/// Category used when none (or only whitespace) is supplied
pub const DEFAULT_CATEGORY: &str = "General";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The persisted and exchanged spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TrackerError::Validation(ValidationError::InvalidInput(
                format!("Unknown transaction type '{}' (expected income or expense)", other),
            ))),
        }
    }
}

/// Apply the blank-category default
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A transaction that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub currency: String,
    #[serde(rename = "date")]
    pub occurred_on: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Create a new record, defaulting a blank category to "General"
    pub fn new(
        kind: TransactionKind,
        category: impl AsRef<str>,
        amount: Money,
        currency: impl Into<String>,
        occurred_on: NaiveDate,
    ) -> Self {
        Self {
            kind,
            category: normalize_category(category.as_ref()),
            amount,
            currency: currency.into().trim().to_string(),
            occurred_on,
            notes: None,
        }
    }

    /// Attach notes; empty text means no notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Check the invariants the store enforces before insert
    pub fn check_constraints(&self) -> Result<(), String> {
        if self.amount.is_negative() {
            return Err(format!("amount must not be negative (got {})", self.amount));
        }
        if self.amount.exceeds_limit() {
            return Err(format!("amount {} is above the limit", self.amount.amount()));
        }
        if self.currency.trim().is_empty() {
            return Err("currency is required".to_string());
        }
        Ok(())
    }
}

/// A stored transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Money,
    pub currency: String,
    #[serde(rename = "date")]
    pub occurred_on: NaiveDate,
    pub notes: Option<String>,
}

impl Transaction {
    /// Attach a store-assigned id to a record
    pub fn from_record(id: TransactionId, record: NewTransaction) -> Self {
        Self {
            id,
            kind: record.kind,
            category: record.category,
            amount: record.amount,
            currency: record.currency,
            occurred_on: record.occurred_on,
            notes: record.notes,
        }
    }

    /// The store-assigned id; never changes once assigned
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// The record without its id, e.g. for re-import comparisons
    pub fn to_record(&self) -> NewTransaction {
        NewTransaction {
            kind: self.kind,
            category: self.category.clone(),
            amount: self.amount,
            currency: self.currency.clone(),
            occurred_on: self.occurred_on,
            notes: self.notes.clone(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.occurred_on.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount.format_with_code(&self.currency)
        )
    }
}
