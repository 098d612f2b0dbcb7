//! YAML Export functionality
//!
//! Exports every stored day to YAML for a human-readable copy of the data.

use std::io::Write;

use crate::error::{RiderbookError, RiderbookResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full database to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> RiderbookResult<()> {
    let export = FullExport::from_storage(storage)?;
    export.validate().map_err(RiderbookError::Export)?;
    let export_err = |e: std::io::Error| RiderbookError::Export(e.to_string());

    writeln!(writer, "# riderbook data export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| RiderbookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RiderbookPaths;
    use crate::models::{DayRecord, Money, Order};
    use crate::storage::DayStore;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RiderbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_yaml_export_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .days
            .save(
                "2025-01-15",
                DayRecord {
                    orders: vec![Order::new("Shoes", Money::from_units(5000), "R1", "Ikeja")],
                    ..DayRecord::default()
                },
            )
            .unwrap();

        let mut yaml_output = Vec::new();
        export_full_yaml(&storage, &mut yaml_output).unwrap();
        let yaml_string = String::from_utf8(yaml_output).unwrap();

        assert!(yaml_string.starts_with("# riderbook data export"));
        assert!(yaml_string.contains("Shoes"));
        assert!(yaml_string.contains("2025-01-15"));

        let imported: FullExport = serde_yaml::from_str(&yaml_string).unwrap();
        assert!(imported.validate().is_ok());
        assert_eq!(imported.days.len(), 1);
        assert_eq!(
            imported.days["2025-01-15"].orders[0].client_price,
            Money::from_units(5000)
        );
    }
}
