//! Decoders turning uploaded bytes into a [`Table`]
//!
//! CSV goes through the `csv` crate; Excel workbooks through `calamine`,
//! reading only the first worksheet.

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_from_rs, Data, DataType, Reader, Xlsx};
use csv::{ReaderBuilder, Trim};

use super::table::Table;
use crate::error::ValidationError;

/// Upload formats we know how to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
}

impl FileFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ValidationError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            _ => Err(ValidationError::UnsupportedFormat(extension)),
        }
    }
}

/// Read and decode the file at `path`, choosing the decoder by extension
pub fn decode_file(path: &Path) -> Result<Table, ValidationError> {
    let format = FileFormat::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|e| ValidationError::Parse(e.to_string()))?;

    match format {
        FileFormat::Csv => decode_csv(&bytes),
        FileFormat::Xlsx => decode_xlsx(&bytes),
    }
}

/// Decode CSV bytes; the first record is the header
pub fn decode_csv(bytes: &[u8]) -> Result<Table, ValidationError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| ValidationError::Parse(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ValidationError::Parse(e.to_string()))?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Decode an xlsx workbook; the first row of the first sheet is the header
pub fn decode_xlsx(bytes: &[u8]) -> Result<Table, ValidationError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: calamine::XlsxError| ValidationError::Parse(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ValidationError::Parse("workbook has no worksheets".into()))?
        .map_err(|e| ValidationError::Parse(e.to_string()))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();
    let rows = rows
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    Ok(Table::new(headers, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        // f64 Display drops a trailing ".0"
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}
