//! CSV Export functionality
//!
//! Writes the transaction listing with the same columns as the workbook's
//! `transactions` sheet. Amounts keep their exact decimal text.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::spreadsheet::TRANSACTION_HEADERS;
use crate::models::Transaction;

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TrackerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(TRANSACTION_HEADERS)?;

    for txn in transactions {
        csv.write_record([
            txn.id().value().to_string(),
            txn.kind.as_str().to_string(),
            txn.category.clone(),
            txn.amount.amount().to_string(),
            txn.currency.clone(),
            txn.occurred_on.format("%Y-%m-%d").to_string(),
            txn.notes.clone().unwrap_or_default(),
        ])?;
    }

    csv.flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{decode_csv, validate_and_parse};
    use crate::reports::test_support::scenario;

    #[test]
    fn test_csv_listing() {
        let mut output = Vec::new();
        export_transactions_csv(&scenario(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,type,category,amount,currency,date,notes"));
        assert_eq!(lines.next(), Some("3,expense,Groceries,8000,PKR,2024-02-01,"));
    }

    #[test]
    fn test_csv_escapes_and_reimports() {
        let mut all = scenario();
        all[0].category = "Food, drinks".into();
        all[0].notes = Some("said \"hi\"".into());

        let mut output = Vec::new();
        export_transactions_csv(&all, &mut output).unwrap();

        let records = validate_and_parse(&decode_csv(&output).unwrap()).unwrap();
        assert_eq!(records[0].category, "Food, drinks");
        assert_eq!(records[0].notes.as_deref(), Some("said \"hi\""));
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_empty_listing_is_header_only() {
        let mut output = Vec::new();
        export_transactions_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,type,category,amount,currency,date,notes\n"
        );
    }
}
