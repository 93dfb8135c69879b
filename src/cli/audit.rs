//! Audit log CLI command

use crate::error::TrackerResult;
use crate::services::ServiceContext;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(context: &ServiceContext, limit: usize) -> TrackerResult<()> {
    let entries = context.audit_logger().read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
