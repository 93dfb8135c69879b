//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use std::io::Write;

/// Export to YAML format
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: &mut W) -> TrackerResult<()> {
    let header = format!(
        "# Budget Tracker Data Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
