//! Excel workbook rendering
//!
//! The `transactions` sheet mirrors the stored rows; the `summary` sheet
//! holds the three headline metrics.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::TrackerResult;
use crate::models::{Money, NewTransaction, Transaction};
use crate::reports::{summarize_records, Summary};

pub const TRANSACTIONS_SHEET: &str = "transactions";
pub const SUMMARY_SHEET: &str = "summary";

pub const TRANSACTION_HEADERS: [&str; 7] =
    ["id", "type", "category", "amount", "currency", "date", "notes"];

/// Headers of an import template (no id column)
pub const TEMPLATE_HEADERS: [&str; 6] = ["type", "category", "amount", "currency", "date", "notes"];

/// Build the two-sheet workbook for `transactions` and `summary`
pub fn render_workbook(transactions: &[Transaction], summary: &Summary) -> TrackerResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(TRANSACTIONS_SHEET)?;
    write_header(sheet, &TRANSACTION_HEADERS, &bold)?;
    for (index, txn) in transactions.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_number(row, 0, txn.id().value() as f64)?;
        write_record(sheet, row, 1, &txn.to_record())?;
    }

    write_summary_sheet(&mut workbook, summary, &bold)?;
    Ok(workbook.save_to_buffer()?)
}

/// Build a workbook of records in import layout (no id column) plus the
/// `summary` sheet over those records
pub fn render_template(records: &[NewTransaction]) -> TrackerResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(TRANSACTIONS_SHEET)?;
    write_header(sheet, &TEMPLATE_HEADERS, &bold)?;
    for (index, record) in records.iter().enumerate() {
        write_record(sheet, index as u32 + 1, 0, record)?;
    }

    write_summary_sheet(&mut workbook, &summarize_records(records), &bold)?;
    Ok(workbook.save_to_buffer()?)
}

fn write_summary_sheet(
    workbook: &mut Workbook,
    summary: &Summary,
    bold: &Format,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;
    write_header(sheet, &["metric", "value"], bold)?;
    for (index, (label, value)) in summary.metrics().iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, *label)?;
        write_money(sheet, row, 1, *value)?;
    }
    Ok(())
}

fn write_header(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<(), XlsxError> {
    for (col, name) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, format)?;
    }
    Ok(())
}

/// Write type, category, amount, currency, date, notes starting at `first_col`
fn write_record(
    sheet: &mut Worksheet,
    row: u32,
    first_col: u16,
    record: &NewTransaction,
) -> Result<(), XlsxError> {
    sheet.write_string(row, first_col, record.kind.as_str())?;
    sheet.write_string(row, first_col + 1, record.category.as_str())?;
    write_money(sheet, row, first_col + 2, record.amount)?;
    sheet.write_string(row, first_col + 3, record.currency.as_str())?;
    sheet.write_string(
        row,
        first_col + 4,
        record.occurred_on.format("%Y-%m-%d").to_string(),
    )?;
    if let Some(notes) = &record.notes {
        sheet.write_string(row, first_col + 5, notes.as_str())?;
    }
    Ok(())
}

/// Numeric cell when the f64 reads back as the same amount, text otherwise
fn write_money(sheet: &mut Worksheet, row: u32, col: u16, value: Money) -> Result<(), XlsxError> {
    let exact = value
        .to_f64()
        .filter(|number| Money::parse(&number.to_string()).ok() == Some(value));

    match exact {
        Some(number) => sheet.write_number(row, col, number)?,
        None => sheet.write_string(row, col, value.amount().to_string())?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{decode_xlsx, validate_and_parse};
    use crate::models::{Period, TransactionKind};
    use crate::reports::summarize;
    use crate::reports::test_support::{scenario, txn};
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn test_workbook_reads_back_as_records() {
        let transactions = scenario();
        let summary = summarize(&transactions, &Period::all());
        let bytes = render_workbook(&transactions, &summary).unwrap();

        let table = decode_xlsx(&bytes).unwrap();
        assert_eq!(table.headers, TRANSACTION_HEADERS);
        assert_eq!(table.cell(0, 0), "3");

        let records = validate_and_parse(&table).unwrap();
        let expected: Vec<_> = transactions.iter().map(|t| t.to_record()).collect();
        assert_eq!(records, expected);
    }

    #[test]
    fn test_high_precision_amounts_survive_round_trip() {
        let transactions = vec![
            txn(2, TransactionKind::Income, "Bonus", dec!(12345678901234.56789), "2024-03-02"),
            txn(1, TransactionKind::Expense, "Tea", dec!(0.1), "2024-03-01"),
        ];
        let summary = summarize(&transactions, &Period::all());
        let bytes = render_workbook(&transactions, &summary).unwrap();

        let table = decode_xlsx(&bytes).unwrap();
        assert_eq!(table.cell(0, 3), "12345678901234.56789");
        assert_eq!(table.cell(1, 3), "0.1");

        let records = validate_and_parse(&table).unwrap();
        let expected: Vec<_> = transactions.iter().map(|t| t.to_record()).collect();
        assert_eq!(records, expected);
    }

    #[test]
    fn test_empty_workbook_still_has_headers() {
        let bytes = render_workbook(&[], &Summary::default()).unwrap();
        let table = decode_xlsx(&bytes).unwrap();
        assert_eq!(table.headers.len(), 7);
        assert!(table.is_empty());
    }

    #[test]
    fn test_template_has_no_id_column() {
        let bytes = render_template(&[]).unwrap();
        let table = decode_xlsx(&bytes).unwrap();
        assert_eq!(table.headers, TEMPLATE_HEADERS);
    }

    #[test]
    fn test_template_carries_summary_sheet() {
        let records: Vec<_> = scenario().iter().map(|t| t.to_record()).collect();
        let bytes = render_template(&records).unwrap();

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec![TRANSACTIONS_SHEET, SUMMARY_SHEET]);

        let summary = workbook.worksheet_range(SUMMARY_SHEET).unwrap();
        assert_eq!(summary.get_value((1, 0)), Some(&Data::String("Total Income".into())));
        assert_eq!(summary.get_value((1, 1)), Some(&Data::Float(50000.0)));
        assert_eq!(summary.get_value((3, 1)), Some(&Data::Float(27000.0)));
    }
}
