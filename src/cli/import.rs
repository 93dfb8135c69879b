//! CLI command handler for file import
//!
//! Imports transactions from CSV or Excel files. With `--dry-run` the rows
//! are validated and shown but nothing is stored.

use std::path::Path;

use crate::display::format_import_preview;
use crate::error::TrackerResult;
use crate::services::{ServiceContext, TransactionService};

/// Handle the import command
pub fn handle_import_command(context: &ServiceContext, file: &Path, dry_run: bool) -> TrackerResult<()> {
    let service = TransactionService::new(context);

    if dry_run {
        let records = service.preview_import(file)?;
        println!("Import Preview for '{}'", file.display());
        println!("{}", "=".repeat(40));
        println!("{}", format_import_preview(&records));
        println!();
        println!("{} row(s) would be imported. Run without --dry-run to import.", records.len());
        return Ok(());
    }

    let result = service.import(file)?;
    println!("{}", result.message);
    println!("Imported {} transaction(s) from {}", result.imported, file.display());
    Ok(())
}
