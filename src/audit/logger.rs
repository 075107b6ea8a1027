//! Append-only JSON-lines audit log

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{KasaError, KasaResult};

use super::entry::AuditEntry;

/// Writes audit entries, one JSON object per line
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush it
    pub fn log(&self, entry: &AuditEntry) -> KasaResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| KasaError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| KasaError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| KasaError::Io(format!("Failed to write audit entry: {}", e)))?;
        file.flush()
            .map_err(|e| KasaError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> KasaResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| KasaError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                KasaError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                KasaError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries
    pub fn read_recent(&self, count: usize) -> KasaResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn entry(id: usize) -> AuditEntry {
        AuditEntry::create(
            EntityType::Invoice,
            format!("inv-{}", id),
            Some(format!("F-{}", id)),
            &json!({"number": format!("F-{}", id)}),
        )
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let (logger, _temp) = logger();
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_one_line_per_entry() {
        let (logger, _temp) = logger();
        for i in 0..3 {
            logger.log(&entry(i)).unwrap();
        }

        let content = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(content.lines().count(), 3);

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[2].entity_id, "inv-2");
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = logger();
        for i in 0..5 {
            logger.log(&entry(i)).unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity_id, "inv-3");
        assert_eq!(recent[1].entity_id, "inv-4");
    }

    #[test]
    fn test_corrupt_line_is_an_error() {
        let (logger, _temp) = logger();
        logger.log(&entry(0)).unwrap();
        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        writeln!(file, "not json").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
