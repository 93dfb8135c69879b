//! Service layer for the budget tracker
//!
//! Each service call is one complete operation: it opens the store through
//! [`with_store`](crate::storage::with_store), does its work, closes the
//! store again and records an audit entry.

pub mod report;
pub mod transaction;

pub use report::{Dashboard, ReportService};
pub use transaction::{ImportResult, TransactionService};

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{Settings, TrackerPaths};
use crate::export::ReportRenderer;
use crate::storage::StoreConfig;

/// Shared configuration handed to every service
pub struct ServiceContext {
    store: StoreConfig,
    audit: AuditLogger,
    renderer: ReportRenderer,
    default_currency: String,
}

impl ServiceContext {
    pub fn new(paths: &TrackerPaths, settings: &Settings) -> Self {
        Self {
            store: settings.store_config(paths),
            audit: AuditLogger::new(paths.audit_log()),
            renderer: ReportRenderer::new(settings.report_config()),
            default_currency: settings.default_currency.clone(),
        }
    }

    pub fn store_config(&self) -> &StoreConfig {
        &self.store
    }

    pub fn audit_logger(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn renderer(&self) -> &ReportRenderer {
        &self.renderer
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Append to the audit log; a failure here never fails the operation
    pub(crate) fn audit(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.log(&entry) {
            warn!(error = %e, operation = %entry.operation, "failed to write audit entry");
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    pub fn context() -> (TempDir, ServiceContext) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let context = ServiceContext::new(&paths, &Settings::default());
        (temp_dir, context)
    }
}
