//! Core data models for the budget tracker
//!
//! Transactions are the only persisted entity. Money and ids are newtypes;
//! periods describe the optional (year, month) filter used by reports.

pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
pub use period::Period;
pub use transaction::{
    normalize_category, NewTransaction, Transaction, TransactionKind, DEFAULT_CATEGORY,
};
