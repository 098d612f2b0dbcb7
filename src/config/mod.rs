//! Configuration module for riderbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RiderbookPaths;
pub use settings::Settings;
