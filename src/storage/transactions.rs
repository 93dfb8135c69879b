//! Transaction store backed by SQLite
//!
//! One table, `transactions`, with an auto-assigned integer id. Dates are
//! stored as ISO-8601 text and amounts as exact decimal text so nothing is
//! lost to floating point.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Statement};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    normalize_category, Money, NewTransaction, Transaction, TransactionId, TransactionKind,
};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL CHECK (type IN ('income', 'expense')),
        category TEXT NOT NULL,
        amount TEXT NOT NULL,
        currency TEXT NOT NULL CHECK (length(currency) > 0),
        date TEXT NOT NULL,
        notes TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
";

const INSERT_SQL: &str = "INSERT INTO transactions (type, category, amount, currency, date, notes)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

const SELECT_ALL_SQL: &str = "SELECT id, type, category, amount, currency, date, notes
     FROM transactions ORDER BY date DESC, id DESC";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Where the store keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    database_path: PathBuf,
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

/// A short-lived handle on the transaction table
///
/// Opening creates the schema if needed; dropping the handle closes the
/// connection.
pub struct TransactionStore {
    conn: Connection,
}

impl TransactionStore {
    /// Open (or create) the database described by `config`
    pub fn open(config: &StoreConfig) -> TrackerResult<Self> {
        let path = config.database_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                TrackerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        debug!(path = %path.display(), "opening transaction store");
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open a throwaway in-memory store
    pub fn open_in_memory() -> TrackerResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> TrackerResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert one transaction and return its new id
    pub fn append(&self, record: &NewTransaction) -> TrackerResult<TransactionId> {
        let mut stmt = self.conn.prepare_cached(INSERT_SQL)?;
        let id = insert(&mut stmt, &self.conn, record)?;
        debug!(id = id.value(), kind = %record.kind, "appended transaction");
        Ok(id)
    }

    /// Insert many transactions in one database transaction
    ///
    /// Either every record is stored or none is.
    pub fn append_many(&mut self, records: &[NewTransaction]) -> TrackerResult<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_SQL)?;
            for record in records {
                insert(&mut stmt, &tx, record)?;
            }
        }
        tx.commit()?;

        debug!(count = records.len(), "appended transactions");
        Ok(records.len())
    }

    /// Every stored transaction, newest date first, then highest id first
    pub fn all(&self) -> TrackerResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                kind: row.get(1)?,
                category: row.get(2)?,
                amount: row.get(3)?,
                currency: row.get(4)?,
                date: row.get(5)?,
                notes: row.get(6)?,
            })
        })?;

        let mut transactions = Vec::new();
        for row in rows {
            transactions.push(row?.into_transaction()?);
        }
        Ok(transactions)
    }

    /// Count stored transactions
    pub fn count(&self) -> TrackerResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    /// Close the connection, surfacing any error instead of ignoring it on drop
    pub fn close(self) -> TrackerResult<()> {
        self.conn.close().map_err(|(_, e)| TrackerError::from(e))
    }
}

fn insert(
    stmt: &mut Statement<'_>,
    conn: &Connection,
    record: &NewTransaction,
) -> TrackerResult<TransactionId> {
    record
        .check_constraints()
        .map_err(TrackerError::constraint)?;

    stmt.execute(params![
        record.kind.as_str(),
        normalize_category(&record.category),
        record.amount.amount().to_string(),
        record.currency.trim(),
        record.occurred_on.format(DATE_FORMAT).to_string(),
        record.notes.as_deref().filter(|n| !n.trim().is_empty()),
    ])?;

    Ok(TransactionId::new(conn.last_insert_rowid()))
}

/// Raw column values as read from SQLite
struct StoredRow {
    id: i64,
    kind: String,
    category: String,
    amount: String,
    currency: String,
    date: String,
    notes: Option<String>,
}

impl StoredRow {
    fn into_transaction(self) -> TrackerResult<Transaction> {
        let corrupt = |field: &str, value: &str| {
            TrackerError::Storage(format!(
                "Row {} has an unreadable {}: '{}'",
                self.id, field, value
            ))
        };

        let kind = TransactionKind::from_str(&self.kind).map_err(|_| corrupt("type", &self.kind))?;
        let amount = Money::parse(&self.amount).map_err(|_| corrupt("amount", &self.amount))?;
        let occurred_on = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| corrupt("date", &self.date))?;

        let record = NewTransaction {
            kind,
            category: self.category,
            amount,
            currency: self.currency,
            occurred_on,
            notes: self.notes,
        };
        Ok(Transaction::from_record(TransactionId::new(self.id), record))
    }
}
