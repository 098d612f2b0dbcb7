//! Day record repository for JSON storage
//!
//! The whole date-keyed map is one JSON document, days.json:
//! `{ "2025-01-15": { "orders": [...], "expenses": [...], "cash_with_riders": 0 } }`
//!
//! Every save rewrites the document through a sibling temp file and a
//! rename, so a failed write leaves the previous days in place.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::error::RiderbookError;
use crate::models::{parse_date_key, DayRecord};

use super::DayStore;

/// The on-disk document: date key to that day's record
pub type DayDocument = BTreeMap<String, DayRecord>;

/// Repository for day records, persisted as a single map document
pub struct DayRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, DayRecord>>,
}

impl DayRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load every day from disk, replacing what is in memory
    pub fn load_from_disk(&self) -> Result<(), RiderbookError> {
        let document = read_document(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RiderbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = document;
        Ok(())
    }

    /// Write the whole map to disk
    pub fn persist(&self) -> Result<(), RiderbookError> {
        let data = self.data.read().map_err(|e| {
            RiderbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_document(&self.path, &data)
    }

    /// Every stored day, ordered by date key
    pub fn get_all(&self) -> Result<DayDocument, RiderbookError> {
        let data = self.data.read().map_err(|e| {
            RiderbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }
}

impl DayStore for DayRepository {
    fn load(&self, date_key: &str) -> Result<DayRecord, RiderbookError> {
        let data = self.data.read().map_err(|e| {
            RiderbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(date_key).cloned().unwrap_or_default())
    }

    fn save(&self, date_key: &str, record: DayRecord) -> Result<(), RiderbookError> {
        {
            let mut data = self.data.write().map_err(|e| {
                RiderbookError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            if record.is_empty() {
                data.remove(date_key);
            } else {
                data.insert(date_key.to_string(), record);
            }
        }

        debug!(date_key, "saved day record");
        self.persist()
    }

    fn date_keys(&self) -> Result<Vec<String>, RiderbookError> {
        let data = self.data.read().map_err(|e| {
            RiderbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.keys().cloned().collect())
    }
}

/// Read days.json; a missing file is an empty document
fn read_document(path: &Path) -> Result<DayDocument, RiderbookError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no day records yet");
            return Ok(DayDocument::new());
        }
        Err(e) => {
            return Err(RiderbookError::Storage(format!(
                "Cannot read day records from {}: {}",
                path.display(),
                e
            )))
        }
    };

    let document: DayDocument = serde_json::from_str(&raw).map_err(|e| {
        RiderbookError::Storage(format!("Day records in {} are corrupt: {}", path.display(), e))
    })?;

    for key in document.keys().filter(|key| parse_date_key(key).is_err()) {
        warn!(date_key = %key, "stored day has a malformed date key");
    }

    let orders: usize = document.values().map(|day| day.orders.len()).sum();
    debug!(days = document.len(), orders, "loaded day records");
    Ok(document)
}

/// Replace days.json with `document`
fn write_document(path: &Path, document: &DayDocument) -> Result<(), RiderbookError> {
    let storage_error = |what: &str, e: &dyn std::fmt::Display| {
        RiderbookError::Storage(format!("Cannot {} {}: {}", what, path.display(), e))
    };

    let bytes = serde_json::to_vec_pretty(document).map_err(|e| storage_error("encode", &e))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory for", &e))?;
    }

    // Same directory as the target so the rename cannot cross filesystems
    let staged = path.with_extension("json.tmp");
    let staged_result = fs::File::create(&staged).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });
    if let Err(e) = staged_result.and_then(|()| fs::rename(&staged, path)) {
        let _ = fs::remove_file(&staged);
        return Err(storage_error("write", &e));
    }

    debug!(days = document.len(), bytes = bytes.len(), "wrote day records");
    Ok(())
}
