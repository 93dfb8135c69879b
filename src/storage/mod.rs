//! Storage layer for the budget tracker
//!
//! Transactions live in a single SQLite table; settings and exported files
//! are written with atomic file replacement. Store handles are acquired per
//! operation and released when the operation finishes.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_bytes_atomic, write_json_atomic};
pub use transactions::{StoreConfig, TransactionStore};

use crate::error::TrackerResult;

/// Acquire a store handle, run `f`, and release the handle
///
/// The connection is closed before this returns, whether `f` succeeded or not.
pub fn with_store<T, F>(config: &StoreConfig, f: F) -> TrackerResult<T>
where
    F: FnOnce(&mut TransactionStore) -> TrackerResult<T>,
{
    let mut store = TransactionStore::open(config)?;
    let value = f(&mut store)?;
    store.close()?;
    Ok(value)
}
