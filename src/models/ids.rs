//! Strongly-typed ID wrapper for stored transactions
//!
//! Transaction ids are integers assigned by the store on insert. Wrapping
//! them keeps row ids from being confused with counts or years.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a transaction by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw row id
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw row id
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i64> for TransactionId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
