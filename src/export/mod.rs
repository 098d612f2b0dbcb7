//! Export module for riderbook
//!
//! Moves data out of the application:
//! - Clipboard: the day's report text, to the system clipboard or a file
//! - CSV: one day's orders and expenses (spreadsheet-compatible)
//! - JSON: machine-readable export of every stored day
//! - YAML: human-readable export of every stored day

pub mod clipboard;
pub mod csv;
pub mod json;
pub mod yaml;

pub use clipboard::{copy_report, ClipboardSink, CopyOutcome, FileSink, SystemClipboard};
pub use csv::export_day_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
