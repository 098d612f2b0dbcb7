//! Storage layer for riderbook
//!
//! Day records live in one JSON document written atomically; the audit
//! hooks services call after each change live here too.

pub mod days;

pub use days::{DayDocument, DayRepository};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::RiderbookPaths;
use crate::error::RiderbookError;
use crate::models::DayRecord;

/// Date-keyed persistence of day records
///
/// `load` of a date with nothing stored yields the empty `DayRecord`.
pub trait DayStore {
    fn load(&self, date_key: &str) -> Result<DayRecord, RiderbookError>;

    fn save(&self, date_key: &str, record: DayRecord) -> Result<(), RiderbookError>;

    /// Every date with stored data, ascending
    fn date_keys(&self) -> Result<Vec<String>, RiderbookError>;
}

/// Main storage coordinator
pub struct Storage {
    paths: RiderbookPaths,
    pub days: DayRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: RiderbookPaths) -> Result<Self, RiderbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            days: DayRepository::new(paths.days_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
        self
    }

    pub fn paths(&self) -> &RiderbookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), RiderbookError> {
        self.days.load_from_disk()
    }

    /// The audit log, when enabled
    pub fn audit_log(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        date_key: &str,
        entity_id: impl Into<String>,
        summary: Option<String>,
        entity: &T,
    ) -> Result<(), RiderbookError> {
        match &self.audit {
            Some(logger) => logger.append(&AuditEntry::create(
                entity_type,
                date_key,
                entity_id,
                summary,
                entity,
            )),
            None => Ok(()),
        }
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        date_key: &str,
        entity_id: impl Into<String>,
        summary: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), RiderbookError> {
        match &self.audit {
            Some(logger) => logger.append(&AuditEntry::update(
                entity_type,
                date_key,
                entity_id,
                summary,
                before,
                after,
            )),
            None => Ok(()),
        }
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        date_key: &str,
        entity_id: impl Into<String>,
        summary: Option<String>,
        entity: &T,
    ) -> Result<(), RiderbookError> {
        match &self.audit {
            Some(logger) => logger.append(&AuditEntry::delete(
                entity_type,
                date_key,
                entity_id,
                summary,
                entity,
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RiderbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.audit_log().is_some());
        assert!(storage.days.date_keys().unwrap().is_empty());
    }

    #[test]
    fn test_disabled_audit_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RiderbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap().with_audit(false);

        storage
            .log_create(EntityType::Order, "2025-01-15", "ord-1", None, &0)
            .unwrap();

        assert!(storage.audit_log().is_none());
        assert!(!paths.audit_log().exists());
    }
}
