//! Append-only audit log, one JSON entry per line
//!
//! Entries carry the date key of the day they changed, so the log can be
//! read back for a single day as well as in full.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RiderbookError, RiderbookResult};

use super::entry::AuditEntry;

/// Writes audit entries to a JSONL file and reads them back by day
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one entry as a single line
    pub fn append(&self, entry: &AuditEntry) -> RiderbookResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;

        // A single write so an interrupted append never splits a line
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error("append to", e))?;

        debug!(
            operation = %entry.operation,
            date_key = %entry.date_key,
            "audit entry appended"
        );
        Ok(())
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> RiderbookResult<Vec<AuditEntry>> {
        self.read_where(|_| true)
    }

    /// Every entry recorded against one date key, oldest first
    pub fn read_day(&self, date_key: &str) -> RiderbookResult<Vec<AuditEntry>> {
        self.read_where(|entry| entry.date_key == date_key)
    }

    /// The last `count` entries, optionally only those for one date key
    pub fn read_recent(
        &self,
        count: usize,
        date_key: Option<&str>,
    ) -> RiderbookResult<Vec<AuditEntry>> {
        let mut entries = match date_key {
            Some(key) => self.read_day(key)?,
            None => self.read_all()?,
        };
        let older = entries.len().saturating_sub(count);
        entries.drain(..older);
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_where(&self, keep: impl Fn(&AuditEntry) -> bool) -> RiderbookResult<Vec<AuditEntry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| self.io_error(&format!("read line {} of", line_no), e))?;
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                RiderbookError::Json(format!("Audit log line {} is malformed: {}", line_no, e))
            })?;
            if keep(&entry) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    fn io_error(&self, action: &str, e: io::Error) -> RiderbookError {
        RiderbookError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.path.display(),
            e
        ))
    }
}
