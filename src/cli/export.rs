//! CLI commands for data export
//!
//! Every subcommand takes an optional output path; without one the file is
//! written to the exports directory under its default name.

use std::path::PathBuf;

use clap::Subcommand;

use super::PeriodArgs;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;
use crate::export::{pdf_file_name, DataFormat, TEMPLATE_FILE_NAME, WORKBOOK_FILE_NAME};
use crate::services::{ReportService, ServiceContext};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all transactions and the summary to an Excel workbook
    Xlsx {
        /// Output file path
        output: Option<PathBuf>,
    },

    /// Export all transactions to CSV
    Csv {
        /// Output file path
        output: Option<PathBuf>,
    },

    /// Generate a PDF budget report for a period
    Pdf {
        /// Output file path
        output: Option<PathBuf>,

        #[command(flatten)]
        period: PeriodArgs,

        /// Currency label for amounts
        #[arg(long)]
        currency: Option<String>,
    },

    /// Export all data as JSON
    Json {
        /// Output file path
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export all data as YAML
    Yaml {
        /// Output file path
        output: Option<PathBuf>,
    },

    /// Write a sample import template workbook
    Template {
        /// Output file path
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    context: &ServiceContext,
    paths: &TrackerPaths,
    cmd: ExportCommands,
) -> TrackerResult<()> {
    let service = ReportService::new(context);
    let target = |output: Option<PathBuf>, default_name: String| {
        output.unwrap_or_else(|| paths.exports_dir().join(default_name))
    };

    let (path, count) = match cmd {
        ExportCommands::Xlsx { output } => {
            let path = target(output, WORKBOOK_FILE_NAME.to_string());
            let count = service.export_spreadsheet(&path)?;
            (path, Some(count))
        }
        ExportCommands::Csv { output } => {
            let path = target(output, "budget_tracker_all.csv".to_string());
            let count = service.export_csv(&path)?;
            (path, Some(count))
        }
        ExportCommands::Pdf {
            output,
            period,
            currency,
        } => {
            let period = period.period()?;
            let path = target(output, pdf_file_name(&period));
            let currency = currency.unwrap_or_else(|| context.default_currency().to_string());
            let count = service.export_pdf(&path, &period, &currency)?;
            if count == 0 {
                println!("No data for selected filters; the report contains placeholders only.");
            }
            (path, Some(count))
        }
        ExportCommands::Json { output, pretty } => {
            let path = target(output, "budget_tracker_all.json".to_string());
            let count = service.export_data(&path, DataFormat::Json, pretty)?;
            (path, Some(count))
        }
        ExportCommands::Yaml { output } => {
            let path = target(output, "budget_tracker_all.yaml".to_string());
            let count = service.export_data(&path, DataFormat::Yaml, false)?;
            (path, Some(count))
        }
        ExportCommands::Template { output } => {
            let path = target(output, TEMPLATE_FILE_NAME.to_string());
            service.export_template(&path, chrono::Local::now().date_naive())?;
            (path, None)
        }
    };

    match count {
        Some(count) => println!("Exported {} transaction(s) to {}", count, path.display()),
        None => println!("Template written to {}", path.display()),
    }
    Ok(())
}
