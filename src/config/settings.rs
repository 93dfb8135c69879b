//! User settings for the budget tracker
//!
//! Holds the display currency set, report titles and the database file name.
//! The explicit [`StoreConfig`] and [`ReportConfig`] structs handed to the
//! store and the renderer are derived from here.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::export::ReportConfig;
use crate::storage::file_io::{read_json, write_json_atomic};
use crate::storage::StoreConfig;

/// User settings for the budget tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label used when none is given
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Currencies offered for display; amounts are never converted
    #[serde(default = "default_currencies")]
    pub currencies: Vec<String>,

    /// Title prefix of the PDF report ("<title> - <period>")
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Document metadata title of generated files
    #[serde(default = "default_document_title")]
    pub document_title: String,

    /// Database file name inside the data directory
    #[serde(default = "default_database_file")]
    pub database_file: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "PKR".to_string()
}

fn default_currencies() -> Vec<String> {
    ["PKR", "USD", "EUR", "GBP"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_report_title() -> String {
    "Budget Report".to_string()
}

fn default_document_title() -> String {
    "Budget Tracker Pro".to_string()
}

fn default_database_file() -> String {
    "budget_tracker.db".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            currencies: default_currencies(),
            report_title: default_report_title(),
            document_title: default_document_title(),
            database_file: default_database_file(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        read_json(paths.settings_file()).map_err(|e| {
            TrackerError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Whether a currency is part of the display set; blank codes never are
    pub fn is_known_currency(&self, code: &str) -> bool {
        let code = code.trim();
        !code.is_empty() && self.currencies.iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    /// Make `code` the default, adding it to the display set if it is new
    pub fn set_default_currency(&mut self, code: &str) -> Result<(), TrackerError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(TrackerError::invalid_input("Currency code cannot be empty"));
        }

        if !self.is_known_currency(code) {
            self.currencies.push(code.to_string());
        }
        self.default_currency = code.to_string();
        Ok(())
    }

    /// Store configuration for these settings
    pub fn store_config(&self, paths: &TrackerPaths) -> StoreConfig {
        StoreConfig::new(paths.data_dir().join(&self.database_file))
    }

    /// Renderer configuration for these settings
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            report_title: self.report_title.clone(),
            document_title: self.document_title.clone(),
        }
    }
}
