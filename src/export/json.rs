//! JSON Export functionality
//!
//! Exports every stored day to JSON format with schema versioning.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RiderbookError, RiderbookResult};
use crate::models::{parse_date_key, DayRecord};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Every stored day, keyed by `YYYY-MM-DD`
    pub days: BTreeMap<String, DayRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub day_count: usize,

    pub order_count: usize,

    pub expense_count: usize,

    pub earliest_date: Option<String>,

    pub latest_date: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> RiderbookResult<Self> {
        let days = storage.days.get_all()?;

        let metadata = ExportMetadata {
            day_count: days.len(),
            order_count: days.values().map(|d| d.orders.len()).sum(),
            expense_count: days.values().map(|d| d.expenses.len()).sum(),
            earliest_date: days.keys().next().cloned(),
            latest_date: days.keys().next_back().cloned(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            days,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for key in self.days.keys() {
            parse_date_key(key).map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}

/// Export the full database to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> RiderbookResult<()> {
    let export = FullExport::from_storage(storage)?;
    export.validate().map_err(RiderbookError::Export)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| RiderbookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RiderbookPaths;
    use crate::models::{Expense, Money, Order};
    use crate::storage::DayStore;
    use tempfile::TempDir;

    fn read_back(json_str: &str) -> FullExport {
        let export: FullExport = serde_json::from_str(json_str).unwrap();
        export.validate().unwrap();
        export
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RiderbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage) {
        storage
            .days
            .save(
                "2025-01-15",
                DayRecord {
                    orders: vec![Order::new("Shoes", Money::from_units(5000), "R1", "Ikeja")],
                    expenses: vec![Expense::new("Fuel", Money::from_units(1000))],
                    cash_with_riders: Money::from_units(500),
                },
            )
            .unwrap();
        storage
            .days
            .save(
                "2025-01-14",
                DayRecord {
                    orders: vec![
                        Order::new("Bag", Money::from_units(3000), "R2", "Yaba"),
                        Order::new("Hat", Money::from_units(800), "R2", "Yaba"),
                    ],
                    ..DayRecord::default()
                },
            )
            .unwrap();
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.day_count, 2);
        assert_eq!(export.metadata.order_count, 3);
        assert_eq!(export.metadata.expense_count, 1);
        assert_eq!(export.metadata.earliest_date.as_deref(), Some("2025-01-14"));
        assert_eq!(export.metadata.latest_date.as_deref(), Some("2025-01-15"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let mut json_output = Vec::new();
        export_full_json(&storage, &mut json_output, true).unwrap();
        let json_string = String::from_utf8(json_output).unwrap();

        let imported = read_back(&json_string);
        assert_eq!(imported.days, storage.days.get_all().unwrap());
    }

    #[test]
    fn test_rejects_bad_date_key() {
        let (_temp_dir, storage) = create_test_storage();
        let mut export = FullExport::from_storage(&storage).unwrap();
        export.days.insert("15/01/2025".into(), DayRecord::default());

        assert!(export.validate().is_err());
    }

    #[test]
    fn test_export_refuses_malformed_stored_date() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);
        storage
            .days
            .save(
                "15/01/2025",
                DayRecord {
                    cash_with_riders: Money::from_units(1),
                    ..DayRecord::default()
                },
            )
            .unwrap();

        let mut out = Vec::new();
        let err = export_full_json(&storage, &mut out, false).unwrap_err();
        assert!(matches!(err, RiderbookError::Export(msg) if msg.contains("15/01/2025")));
        assert!(out.is_empty());
    }
}
