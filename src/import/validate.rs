//! Validation of decoded tables into transaction records

use chrono::{NaiveDate, NaiveDateTime};

use super::table::Table;
use crate::error::ValidationError;
use crate::models::{Money, MoneyParseError, NewTransaction, TransactionKind, MAX_AMOUNT};

/// Columns every import must carry, in reporting order
pub const REQUIRED_COLUMNS: [&str; 5] = ["type", "category", "amount", "currency", "date"];

/// Optional free-text column
pub const NOTES_COLUMN: &str = "notes";

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y", "%m-%d-%Y", "%d.%m.%Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

struct Columns {
    kind: usize,
    category: usize,
    amount: usize,
    currency: usize,
    date: usize,
    notes: Option<usize>,
}

impl Columns {
    fn locate(table: &Table) -> Result<Self, ValidationError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| table.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingColumns(missing));
        }

        let index = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| ValidationError::MissingColumns(vec![name.to_string()]))
        };

        Ok(Self {
            kind: index("type")?,
            category: index("category")?,
            amount: index("amount")?,
            currency: index("currency")?,
            date: index("date")?,
            notes: table.column_index(NOTES_COLUMN),
        })
    }
}

/// Check a decoded table and coerce it into records, preserving row order
///
/// Row numbers in errors count the header as row 1, matching what a
/// spreadsheet shows.
pub fn validate_and_parse(table: &Table) -> Result<Vec<NewTransaction>, ValidationError> {
    let columns = Columns::locate(table)?;

    let mut records = Vec::with_capacity(table.len());
    for index in 0..table.len() {
        let row = index + 2;
        let cell = |column: usize| table.cell(index, column).trim();

        let kind_text = cell(columns.kind);
        let kind = kind_text
            .parse::<TransactionKind>()
            .map_err(|_| ValidationError::InvalidKind {
                row,
                value: kind_text.to_string(),
            })?;

        let amount_text = cell(columns.amount);
        let amount = Money::parse(amount_text).map_err(|e| match e {
            MoneyParseError::OutOfRange(_) => ValidationError::AmountTooLarge {
                row,
                limit: MAX_AMOUNT.to_string(),
            },
            _ => ValidationError::InvalidTypes {
                row,
                column: "amount",
                value: amount_text.to_string(),
            },
        })?;
        if amount.is_negative() {
            return Err(ValidationError::NegativeAmount { row });
        }

        let date_text = cell(columns.date);
        let occurred_on = parse_date(date_text).ok_or_else(|| ValidationError::InvalidTypes {
            row,
            column: "date",
            value: date_text.to_string(),
        })?;

        let currency = cell(columns.currency);
        if currency.is_empty() {
            return Err(ValidationError::MissingValue {
                row,
                column: "currency",
            });
        }

        let mut record =
            NewTransaction::new(kind, cell(columns.category), amount, currency, occurred_on);
        if let Some(notes) = columns.notes {
            record = record.with_notes(cell(notes));
        }
        records.push(record);
    }

    Ok(records)
}

/// Parse a calendar date in any of the accepted layouts
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                .map(|dt| dt.date())
        })
}
