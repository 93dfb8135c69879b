//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod export;
pub mod import;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import_command;
pub use report::{handle_breakdown_command, handle_summary_command, handle_trend_command};
pub use transaction::{handle_add_command, handle_list_command, AddArgs};

use clap::Args;

use crate::error::TrackerResult;
use crate::models::Period;

/// `--year` / `--month` filter shared by reporting commands
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Only include transactions from this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only include transactions from this month (1-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

impl PeriodArgs {
    pub fn period(&self) -> TrackerResult<Period> {
        Period::new(self.year, self.month)
    }
}

/// Whether stdout is a terminal that can show colours
pub(crate) fn use_color() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}
