//! Report service
//!
//! Builds the dashboard numbers and writes exported documents.

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::ServiceContext;
use crate::audit::AuditEntry;
use crate::error::TrackerResult;
use crate::export::{DataFormat, ReportInput};
use crate::models::{Period, Transaction, TransactionKind};
use crate::reports::{
    available_years, breakdown_by_category, filter_period, monthly_trend, summarize,
    CategoryAmount, MonthlyTotals, Summary,
};
use crate::storage::{with_store, write_bytes_atomic};

/// Everything the dashboard shows for one period
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub period: Period,
    pub summary: Summary,
    pub expense_breakdown: Vec<CategoryAmount>,
    pub income_breakdown: Vec<CategoryAmount>,
    /// Monthly totals over all data, ignoring the period
    pub trend: Vec<MonthlyTotals>,
    pub years: Vec<i32>,
    pub transaction_count: usize,
}

/// Service for summaries and exports
pub struct ReportService<'a> {
    context: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    pub fn new(context: &'a ServiceContext) -> Self {
        Self { context }
    }

    fn load(&self) -> TrackerResult<Vec<Transaction>> {
        with_store(self.context.store_config(), |store| store.all())
    }

    /// Summary, breakdowns and trend for `period`
    pub fn dashboard(&self, period: &Period) -> TrackerResult<Dashboard> {
        let all = self.load()?;

        Ok(Dashboard {
            period: *period,
            summary: summarize(&all, period),
            expense_breakdown: breakdown_by_category(&all, period, TransactionKind::Expense),
            income_breakdown: breakdown_by_category(&all, period, TransactionKind::Income),
            trend: monthly_trend(&all),
            years: available_years(&all),
            transaction_count: all.iter().filter(|t| period.contains(t.occurred_on)).count(),
        })
    }

    /// Workbook of every transaction with the all-time summary
    pub fn export_spreadsheet(&self, path: &Path) -> TrackerResult<usize> {
        let all = self.load()?;
        let input = self.input(&all, &Period::all(), self.context.default_currency());
        let bytes = self.context.renderer().spreadsheet(&input)?;
        self.write("xlsx", path, &bytes, all.len())
    }

    /// PDF report for `period`, amounts labelled with `currency`
    pub fn export_pdf(&self, path: &Path, period: &Period, currency: &str) -> TrackerResult<usize> {
        let all = self.load()?;
        let filtered = filter_period(&all, period);
        let input = self.input(&filtered, period, currency);
        let bytes = self.context.renderer().pdf(&input)?;
        self.write("pdf", path, &bytes, filtered.len())
    }

    /// CSV listing of every transaction
    pub fn export_csv(&self, path: &Path) -> TrackerResult<usize> {
        let all = self.load()?;
        let input = self.input(&all, &Period::all(), self.context.default_currency());
        let bytes = self.context.renderer().csv_listing(&input)?;
        self.write("csv", path, &bytes, all.len())
    }

    /// JSON or YAML dump of every transaction
    pub fn export_data(&self, path: &Path, format: DataFormat, pretty: bool) -> TrackerResult<usize> {
        let all = self.load()?;
        let input = self.input(&all, &Period::all(), self.context.default_currency());
        let bytes = self.context.renderer().data_dump(&input, format, pretty)?;
        self.write(format.extension(), path, &bytes, all.len())
    }

    /// Sample import workbook dated `today`
    pub fn export_template(&self, path: &Path, today: NaiveDate) -> TrackerResult<usize> {
        let bytes = self.context.renderer().template(today)?;
        self.write("template", path, &bytes, 0)
    }

    /// Summary and expense breakdown are taken over `transactions` as given
    fn input<'t>(
        &self,
        transactions: &'t [Transaction],
        period: &Period,
        currency: &str,
    ) -> ReportInput<'t> {
        let summary = summarize(transactions, &Period::all());
        let breakdown =
            breakdown_by_category(transactions, &Period::all(), TransactionKind::Expense);
        ReportInput {
            transactions,
            summary,
            breakdown,
            period_label: period.label(),
            currency: currency.to_string(),
        }
    }

    fn write(&self, kind: &str, path: &Path, bytes: &[u8], count: usize) -> TrackerResult<usize> {
        write_bytes_atomic(path, bytes)?;
        info!(format = kind, path = %path.display(), transactions = count, "export written");
        self.context.audit(AuditEntry::exported(kind, path, count));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::import::{decode_file, validate_and_parse};
    use crate::models::{Money, NewTransaction};
    use crate::services::test_support::context;
    use crate::services::TransactionService;
    use rust_decimal_macros::dec;

    fn seed(ctx: &ServiceContext) {
        let service = TransactionService::new(ctx);
        for (kind, category, amount, date) in [
            (TransactionKind::Income, "Salary", dec!(50000), "2024-01-05"),
            (TransactionKind::Expense, "Rent", dec!(15000), "2024-01-10"),
            (TransactionKind::Expense, "Groceries", dec!(8000), "2024-02-01"),
        ] {
            service
                .add(NewTransaction::new(
                    kind,
                    category,
                    Money::from_decimal(amount),
                    "PKR",
                    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                ))
                .unwrap();
        }
    }

    #[test]
    fn test_dashboard() {
        let (_temp, ctx) = context();
        seed(&ctx);

        let dashboard = ReportService::new(&ctx)
            .dashboard(&Period::month_of(2024, 1).unwrap())
            .unwrap();

        assert_eq!(dashboard.summary.balance.amount(), dec!(35000));
        assert_eq!(dashboard.expense_breakdown.len(), 1);
        assert_eq!(dashboard.income_breakdown[0].category, "Salary");
        assert_eq!(dashboard.trend.len(), 2);
        assert_eq!(dashboard.years, vec![2024]);
        assert_eq!(dashboard.transaction_count, 2);
    }

    #[test]
    fn test_dashboard_on_empty_store() {
        let (_temp, ctx) = context();
        let dashboard = ReportService::new(&ctx).dashboard(&Period::all()).unwrap();

        assert_eq!(dashboard.summary, Summary::default());
        assert!(dashboard.expense_breakdown.is_empty());
        assert!(dashboard.years.is_empty());
    }

    #[test]
    fn test_spreadsheet_export_reimports() {
        let (temp, ctx) = context();
        seed(&ctx);
        let path = temp.path().join("out").join("all.xlsx");

        let written = ReportService::new(&ctx).export_spreadsheet(&path).unwrap();
        assert_eq!(written, 3);

        let records = validate_and_parse(&decode_file(&path).unwrap()).unwrap();
        let stored: Vec<_> = TransactionService::new(&ctx)
            .all()
            .unwrap()
            .iter()
            .map(|t| t.to_record())
            .collect();
        assert_eq!(records, stored);
    }

    #[test]
    fn test_pdf_export_filters_period() {
        let (temp, ctx) = context();
        seed(&ctx);
        let path = temp.path().join("report.pdf");

        let written = ReportService::new(&ctx)
            .export_pdf(&path, &Period::month_of(2024, 2).unwrap(), "USD")
            .unwrap();
        assert_eq!(written, 1);

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let entries = ctx.audit_logger().read_all().unwrap();
        let last = entries.last().unwrap();
        assert_eq!(last.operation, Operation::Export);
        assert!(last.summary.starts_with("Exported pdf"));
    }

    #[test]
    fn test_pdf_export_on_empty_store() {
        let (temp, ctx) = context();
        let path = temp.path().join("empty.pdf");

        let written = ReportService::new(&ctx)
            .export_pdf(&path, &Period::all(), "PKR")
            .unwrap();
        assert_eq!(written, 0);
        assert!(path.exists());
    }

    #[test]
    fn test_csv_data_and_template_exports() {
        let (temp, ctx) = context();
        seed(&ctx);
        let service = ReportService::new(&ctx);

        let csv_path = temp.path().join("all.csv");
        assert_eq!(service.export_csv(&csv_path).unwrap(), 3);
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert!(csv.starts_with("id,type,category,amount,currency,date,notes"));

        let json_path = temp.path().join("all.json");
        service
            .export_data(&json_path, DataFormat::Json, true)
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["metadata"]["transaction_count"], 3);

        let template_path = temp.path().join("template.xlsx");
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        service.export_template(&template_path, today).unwrap();
        let records = validate_and_parse(&decode_file(&template_path).unwrap()).unwrap();
        assert_eq!(records.len(), 4);
    }
}
