//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Import problems get their own structured
//! [`ValidationError`] so callers can show a precise message to the user.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Persistence errors (I/O or constraint failure in the store)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Malformed import data or user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Document rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Errors writing exported documents
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a storage error for a failed constraint
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Storage(format!("constraint failed: {}", message.into()))
    }

    /// Shortcut for a free-form invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::Validation(ValidationError::InvalidInput(message.into()))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Problems found while decoding or validating imported tabular data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The upload is neither CSV nor xlsx
    #[error("Unsupported file format. Please upload CSV or Excel file.")]
    UnsupportedFormat(String),

    /// Required header columns are absent (listed in required order)
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A cell could not be coerced to a number or a date
    #[error("Invalid data types in amount or date columns (row {row}, {column}: '{value}')")]
    InvalidTypes {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The type column holds something other than income/expense
    #[error("Invalid transaction type '{value}' in row {row} (expected income or expense)")]
    InvalidKind { row: usize, value: String },

    /// Amounts are never negative; the kind carries the direction
    #[error("Negative amount in row {row}; use type 'expense' instead")]
    NegativeAmount { row: usize },

    /// The amount parsed but is above the accepted ceiling
    #[error("Amount in row {row} is too large (limit {limit})")]
    AmountTooLarge { row: usize, limit: String },

    /// A required cell is empty
    #[error("Missing value for '{column}' in row {row}")]
    MissingValue { row: usize, column: &'static str },

    /// The decoder failed on the raw bytes
    #[error("Error processing file: {0}")]
    Parse(String),

    /// Invalid value supplied directly by the user
    #[error("{0}")]
    InvalidInput(String),
}

impl ValidationError {
    /// Comma-joined list of missing columns, if this is a missing-columns error
    pub fn missing_columns(&self) -> Option<String> {
        match self {
            Self::MissingColumns(columns) => Some(columns.join(", ")),
            _ => None,
        }
    }

    /// Check if this is a type coercion error
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::InvalidTypes { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Render(format!("CSV: {}", err))
    }
}

impl From<rust_xlsxwriter::XlsxError> for TrackerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Render(format!("spreadsheet: {}", err))
    }
}

impl From<printpdf::Error> for TrackerError {
    fn from(err: printpdf::Error) -> Self {
        Self::Render(format!("PDF: {}", err))
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_missing_columns_message() {
        let err = ValidationError::MissingColumns(vec!["amount".into(), "currency".into()]);
        assert_eq!(err.to_string(), "Missing required columns: amount, currency");
        assert_eq!(err.missing_columns().as_deref(), Some("amount, currency"));
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: TrackerError = ValidationError::Parse("bad header".into()).into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Error processing file: bad header");
    }

    #[test]
    fn test_constraint_error() {
        let err = TrackerError::constraint("currency is empty");
        assert!(err.is_storage());
        assert_eq!(err.to_string(), "Storage error: constraint failed: currency is empty");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
