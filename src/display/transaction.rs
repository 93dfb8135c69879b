//! Transaction display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{NewTransaction, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl TransactionRow {
    fn new(id: String, record: &NewTransaction) -> Self {
        Self {
            id,
            date: record.occurred_on.format("%Y-%m-%d").to_string(),
            kind: record.kind.to_string(),
            category: truncate(&record.category, 30),
            amount: record.amount.format_with_code(&record.currency),
            notes: record.notes.as_deref().map(|n| truncate(n, 40)).unwrap_or_default(),
        }
    }
}

fn render(rows: Vec<TransactionRow>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));
    table.to_string()
}

/// Format stored transactions as a table
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions
        .iter()
        .map(|t| TransactionRow::new(t.id().to_string(), &t.to_record()))
        .collect();
    format!("{}\n{} transaction(s)", render(rows), transactions.len())
}

/// Format records that would be imported, numbered by position
pub fn format_import_preview(records: &[NewTransaction]) -> String {
    if records.is_empty() {
        return "No rows to import.".to_string();
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, r)| TransactionRow::new((i + 1).to_string(), r))
        .collect();
    render(rows)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id()));
    output.push_str(&format!("Date:        {}\n", txn.occurred_on.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_code(&txn.currency)
    ));

    if let Some(notes) = &txn.notes {
        output.push_str(&format!("Notes:       {}\n", notes));
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
