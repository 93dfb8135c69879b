//! Audit logging for the budget tracker
//!
//! Records every create, import and export in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log entry with timestamp, operation, the affected
//!   transaction id (if any), a one-line summary and optional JSON details.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::created(&transaction))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
