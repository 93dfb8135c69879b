//! Transaction service
//!
//! Adding single transactions, listing them by period, and bulk import from
//! CSV or Excel files.

use std::path::Path;

use tracing::info;

use super::ServiceContext;
use crate::audit::AuditEntry;
use crate::error::TrackerResult;
use crate::import;
use crate::models::{normalize_category, NewTransaction, Period, Transaction};
use crate::reports::filter_period;
use crate::storage::with_store;

/// Message shown after a successful import
pub const IMPORT_SUCCESS_MESSAGE: &str = "File processed successfully!";

/// Outcome of a bulk import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: usize,
    pub message: String,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    context: &'a ServiceContext,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(context: &'a ServiceContext) -> Self {
        Self { context }
    }

    /// Store one transaction
    pub fn add(&self, mut record: NewTransaction) -> TrackerResult<Transaction> {
        record.category = normalize_category(&record.category);
        record.currency = record.currency.trim().to_string();
        record.notes = record.notes.filter(|n| !n.trim().is_empty());

        let id = with_store(self.context.store_config(), |store| store.append(&record))?;
        let txn = Transaction::from_record(id, record);

        info!(id = id.value(), kind = %txn.kind, "transaction added");
        self.context.audit(AuditEntry::created(&txn));
        Ok(txn)
    }

    /// Every stored transaction, newest first
    pub fn all(&self) -> TrackerResult<Vec<Transaction>> {
        with_store(self.context.store_config(), |store| store.all())
    }

    /// Stored transactions inside `period`, newest first
    pub fn list(&self, period: &Period) -> TrackerResult<Vec<Transaction>> {
        let all = self.all()?;
        Ok(filter_period(&all, period))
    }

    /// Decode and validate a file without storing anything
    pub fn preview_import(&self, path: &Path) -> TrackerResult<Vec<NewTransaction>> {
        Ok(import::read_transactions(path)?)
    }

    /// Decode, validate and store every row of a file
    ///
    /// Nothing is stored unless every row is valid.
    pub fn import(&self, path: &Path) -> TrackerResult<ImportResult> {
        let records = self.preview_import(path)?;
        let imported = with_store(self.context.store_config(), |store| {
            store.append_many(&records)
        })?;

        info!(count = imported, source = %path.display(), "transactions imported");
        self.context.audit(AuditEntry::imported(imported, path));

        Ok(ImportResult {
            imported,
            message: IMPORT_SUCCESS_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::error::ValidationError;
    use crate::models::{Money, TransactionKind};
    use crate::services::test_support::context;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(kind: TransactionKind, category: &str, amount: i64, date: &str) -> NewTransaction {
        NewTransaction::new(
            kind,
            category,
            Money::from_decimal(amount.into()),
            "PKR",
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_add_and_list() {
        let (_temp, ctx) = context();
        let service = TransactionService::new(&ctx);

        service
            .add(record(TransactionKind::Income, "Salary", 50000, "2024-01-05"))
            .unwrap();
        service
            .add(record(TransactionKind::Expense, "Rent", 15000, "2024-01-10"))
            .unwrap();
        service
            .add(record(TransactionKind::Expense, "Groceries", 8000, "2024-02-01"))
            .unwrap();

        let january = service.list(&Period::month_of(2024, 1).unwrap()).unwrap();
        let names: Vec<_> = january.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Salary"]);
        assert_eq!(service.all().unwrap().len(), 3);
    }

    #[test]
    fn test_add_is_audited() {
        let (_temp, ctx) = context();
        let service = TransactionService::new(&ctx);

        let txn = service
            .add(record(TransactionKind::Expense, "  ", 10, "2024-01-05"))
            .unwrap();
        assert_eq!(txn.category, "General");

        let entries = ctx.audit_logger().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, Some(txn.id().to_string()));
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let (_temp, ctx) = context();
        let service = TransactionService::new(&ctx);

        let mut bad = record(TransactionKind::Expense, "Rent", 1, "2024-01-05");
        bad.amount = Money::from_decimal(dec!(-1));

        assert!(service.add(bad).unwrap_err().is_storage());
        assert!(ctx.audit_logger().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_import_csv() {
        let (temp, ctx) = context();
        let service = TransactionService::new(&ctx);
        let path = temp.path().join("upload.csv");
        std::fs::write(
            &path,
            "type,category,amount,currency,date,notes\n\
             income,Salary,50000,PKR,2024-01-05,Monthly salary\n\
             expense,Rent,15000,PKR,2024-01-10,\n",
        )
        .unwrap();

        let preview = service.preview_import(&path).unwrap();
        assert_eq!(preview.len(), 2);
        assert!(service.all().unwrap().is_empty());

        let result = service.import(&path).unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(result.message, "File processed successfully!");
        assert_eq!(service.all().unwrap().len(), 2);

        let entries = ctx.audit_logger().read_all().unwrap();
        assert_eq!(entries.last().unwrap().operation, Operation::Import);
    }

    #[test]
    fn test_import_with_missing_columns_stores_nothing() {
        let (temp, ctx) = context();
        let service = TransactionService::new(&ctx);
        let path = temp.path().join("upload.csv");
        std::fs::write(&path, "type,category,date\nincome,Salary,2024-01-05\n").unwrap();

        let err = service.import(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required columns: amount, currency"
        );
        assert!(service.all().unwrap().is_empty());
    }

    #[test]
    fn test_import_unsupported_format() {
        let (temp, ctx) = context();
        let service = TransactionService::new(&ctx);
        let path = temp.path().join("upload.txt");
        std::fs::write(&path, "whatever").unwrap();

        match service.import(&path) {
            Err(crate::error::TrackerError::Validation(ValidationError::UnsupportedFormat(_))) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
