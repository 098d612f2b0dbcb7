//! Path management for riderbook
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `RIDERBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/riderbook` or `~/.config/riderbook`
//! 3. Windows: `%APPDATA%\riderbook`

use std::path::PathBuf;

use crate::error::RiderbookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RIDERBOOK_DATA_DIR";

/// Manages all paths used by riderbook
#[derive(Debug, Clone)]
pub struct RiderbookPaths {
    base_dir: PathBuf,
}

impl RiderbookPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, RiderbookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/riderbook/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to days.json (every day record, keyed by date)
    pub fn days_file(&self) -> PathBuf {
        self.data_dir().join("days.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), RiderbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RiderbookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RiderbookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if riderbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RiderbookError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                RiderbookError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("riderbook"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RiderbookError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RiderbookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("riderbook"))
}
