//! Export module for the budget tracker
//!
//! Provides report and data export in multiple formats:
//! - xlsx: transactions and summary sheets (spreadsheet-compatible)
//! - PDF: printable budget report for a period
//! - CSV: flat transaction listing
//! - JSON / YAML: full data dump with schema versioning
//!
//! All renderers are pure: they take data and return bytes (or write to a
//! caller-supplied writer). Writing files is left to the service layer.

pub mod csv;
pub mod json;
pub mod pdf;
pub mod spreadsheet;
pub mod template;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use pdf::{layout_pdf, render_pdf, PdfElement, PdfLayout, PdfPage};
pub use spreadsheet::{SUMMARY_SHEET, TRANSACTIONS_SHEET};
pub use template::{template_records, TEMPLATE_FILE_NAME};
pub use yaml::export_full_yaml;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::models::{Period, Transaction};
use crate::reports::{CategoryAmount, Summary};

/// Default file name of the full workbook export
pub const WORKBOOK_FILE_NAME: &str = "budget_tracker_all.xlsx";

/// Titles used by rendered documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Prefix of the PDF heading, followed by the period label
    pub report_title: String,
    /// PDF document metadata title
    pub document_title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_title: "Budget Report".to_string(),
            document_title: "Budget Tracker Pro".to_string(),
        }
    }
}

/// Everything a report rendering needs
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub transactions: &'a [Transaction],
    pub summary: Summary,
    pub breakdown: Vec<CategoryAmount>,
    pub period_label: String,
    /// Display label only; amounts are never converted
    pub currency: String,
}

/// Machine-readable dump formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Renders reports with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Workbook with `transactions` and `summary` sheets
    pub fn spreadsheet(&self, input: &ReportInput<'_>) -> TrackerResult<Vec<u8>> {
        spreadsheet::render_workbook(input.transactions, &input.summary)
    }

    /// Page layout of the PDF report
    pub fn layout_pdf(&self, input: &ReportInput<'_>) -> PdfLayout {
        pdf::layout_pdf(
            &self.config.report_title,
            &self.config.document_title,
            input,
        )
    }

    /// The PDF report as bytes
    pub fn pdf(&self, input: &ReportInput<'_>) -> TrackerResult<Vec<u8>> {
        pdf::render_pdf(&self.layout_pdf(input))
    }

    /// CSV listing of the input's transactions
    pub fn csv_listing(&self, input: &ReportInput<'_>) -> TrackerResult<Vec<u8>> {
        let mut output = Vec::new();
        export_transactions_csv(input.transactions, &mut output)?;
        Ok(output)
    }

    /// Full data dump of the input's transactions and summary
    pub fn data_dump(
        &self,
        input: &ReportInput<'_>,
        format: DataFormat,
        pretty: bool,
    ) -> TrackerResult<Vec<u8>> {
        let export = FullExport::new(input.transactions.to_vec(), input.summary);
        let mut output = Vec::new();
        match format {
            DataFormat::Json => export_full_json(&export, &mut output, pretty)?,
            DataFormat::Yaml => export_full_yaml(&export, &mut output)?,
        }
        Ok(output)
    }

    /// The sample import workbook, dated `today`
    pub fn template(&self, today: NaiveDate) -> TrackerResult<Vec<u8>> {
        spreadsheet::render_template(&template_records(today))
    }
}

/// File name for a period's PDF report, e.g. `budget_report_January_2024.pdf`
pub fn pdf_file_name(period: &Period) -> String {
    format!("budget_report_{}.pdf", period.file_slug())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{decode_xlsx, validate_and_parse};
    use crate::reports::summarize;
    use crate::reports::test_support::scenario;

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(
            pdf_file_name(&Period::month_of(2024, 1).unwrap()),
            "budget_report_January_2024.pdf"
        );
        assert_eq!(pdf_file_name(&Period::all()), "budget_report_All_time.pdf");
        assert_eq!(pdf_file_name(&Period::year(2023)), "budget_report_2023.pdf");
    }

    #[test]
    fn test_renderer_uses_configured_titles() {
        let renderer = ReportRenderer::new(ReportConfig {
            report_title: "Household".into(),
            document_title: "Home Ledger".into(),
        });
        let input = ReportInput {
            transactions: &[],
            summary: Summary::default(),
            breakdown: Vec::new(),
            period_label: "2024".into(),
            currency: "USD".into(),
        };

        let layout = renderer.layout_pdf(&input);
        assert_eq!(layout.document_title, "Home Ledger");
        assert_eq!(
            layout.pages[0].elements[0],
            PdfElement::Title("Household - 2024".into())
        );
        assert!(renderer.pdf(&input).is_ok());
    }

    #[test]
    fn test_template_imports_cleanly() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let bytes = ReportRenderer::default().template(today).unwrap();

        let records = validate_and_parse(&decode_xlsx(&bytes).unwrap()).unwrap();
        assert_eq!(records, template_records(today));
    }

    #[test]
    fn test_data_dump_formats() {
        let all = scenario();
        let input = ReportInput {
            transactions: &all,
            summary: summarize(&all, &Period::all()),
            breakdown: Vec::new(),
            period_label: Period::all().label(),
            currency: "PKR".into(),
        };
        let renderer = ReportRenderer::default();

        let json = renderer.data_dump(&input, DataFormat::Json, false).unwrap();
        assert!(serde_json::from_slice::<FullExport>(&json).is_ok());

        let yaml = renderer.data_dump(&input, DataFormat::Yaml, false).unwrap();
        assert!(String::from_utf8(yaml).unwrap().contains("transactions:"));

        let csv = renderer.csv_listing(&input).unwrap();
        assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 4);
    }
}
