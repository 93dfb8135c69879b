//! Append-only audit trail
//!
//! One JSON object per line; every write is flushed before `log` returns.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Writes and reads the JSONL audit trail
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    fn open_for_append(&self) -> TrackerResult<File> {
        if let Some(dir) = self.log_path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                TrackerError::Io(format!("Cannot create {}: {}", dir.display(), e))
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Cannot open audit trail: {}", e)))
    }

    /// Append `entry` as one line
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let mut line = serde_json::to_vec(entry)
            .map_err(|e| TrackerError::Json(format!("Cannot encode audit entry: {}", e)))?;
        line.push(b'\n');

        let mut file = self.open_for_append()?;
        file.write_all(&line)
            .and_then(|_| file.flush())
            .map_err(|e| TrackerError::Io(format!("Cannot append to audit trail: {}", e)))
    }

    /// Every entry, oldest first. A missing file is an empty trail.
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TrackerError::Io(format!("Cannot open audit trail: {}", e))),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                TrackerError::Io(format!("Cannot read audit line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line).map_err(|e| {
                TrackerError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
            })?);
        }
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    fn export_entry(i: usize) -> AuditEntry {
        AuditEntry::exported("csv", &PathBuf::from(format!("out-{}.csv", i)), i)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&AuditEntry::imported(2, &PathBuf::from("a.csv")))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Import);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&export_entry(i)).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].summary.ends_with("out-7.csv"));
        assert!(recent[2].summary.ends_with("out-9.csv"));
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("nested").join("audit.log"));

        logger.log(&export_entry(1)).unwrap();
        assert!(logger.path().exists());
    }

    #[test]
    fn test_corrupt_line_is_json_error() {
        let (logger, _temp) = create_test_logger();
        logger.log(&export_entry(1)).unwrap();
        std::fs::write(logger.path(), "not json\n").unwrap();

        assert!(matches!(logger.read_all(), Err(TrackerError::Json(_))));
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger.log(&export_entry(1)).unwrap();

        let logger2 = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(logger2.read_all().unwrap().len(), 1);
    }
}
