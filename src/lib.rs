//! Budget Tracker - personal income and expense tracking
//!
//! This library provides the core functionality for the `budget` command line
//! application: recording income and expense transactions, summarizing them
//! by month or year, importing them from CSV/Excel files and exporting
//! workbooks, CSV listings, data dumps and PDF reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, periods)
//! - `storage`: SQLite transaction store and atomic file writes
//! - `reports`: Pure aggregations (summary, category breakdown, trend)
//! - `import`: CSV/xlsx decoding and validation
//! - `export`: Workbook, PDF, CSV, JSON and YAML rendering
//! - `audit`: Audit logging system
//! - `services`: One call per user operation
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{Settings, TrackerPaths};
//! use budget_tracker::models::Period;
//! use budget_tracker::services::{ReportService, ServiceContext};
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let context = ServiceContext::new(&paths, &settings);
//! let dashboard = ReportService::new(&context).dashboard(&Period::year(2024))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult, ValidationError};
