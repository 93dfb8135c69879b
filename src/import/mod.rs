//! Import of transactions from CSV and Excel uploads
//!
//! Decoding and validation are separate steps: a decoder produces a generic
//! [`Table`], and [`validate_and_parse`] turns it into records or explains
//! why it cannot.

pub mod decode;
pub mod table;
pub mod validate;

pub use decode::{decode_csv, decode_file, decode_xlsx, FileFormat};
pub use table::Table;
pub use validate::{parse_date, validate_and_parse, NOTES_COLUMN, REQUIRED_COLUMNS};

use std::path::Path;

use crate::error::ValidationError;
use crate::models::NewTransaction;

/// Decode and validate the file at `path` in one step
pub fn read_transactions(path: &Path) -> Result<Vec<NewTransaction>, ValidationError> {
    let table = decode_file(path)?;
    validate_and_parse(&table)
}
