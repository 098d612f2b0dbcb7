//! riderbook - daily bookkeeping and reconciliation for delivery riders
//!
//! Records each day's delivery orders, expenses and the cash riders still
//! hold, and turns them into a reconciliation report in two forms: a
//! screen layout and a plain text meant for the clipboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (orders, expenses, day records, money)
//! - `storage`: JSON file storage layer
//! - `services`: Validation and audit logging for data changes
//! - `audit`: Audit logging system
//! - `reports`: Aggregation of a day into report totals
//! - `display`: Report rendering and terminal listings
//! - `export`: Clipboard hand-off and JSON/YAML/CSV export
//! - `cli`: Command handlers for the `riderbook` binary
//! - `logger`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust
//! use riderbook::display::render_display;
//! use riderbook::models::{DayRecord, Expense, Money, Order};
//! use riderbook::reports::aggregate;
//!
//! let record = DayRecord {
//!     orders: vec![Order::new("Shoes", Money::from_units(5000), "R1", "Ikeja")],
//!     expenses: vec![Expense::new("Fuel", Money::from_units(1000))],
//!     cash_with_riders: Money::from_units(500),
//! };
//!
//! let document = render_display(&aggregate(&record), "2025-01-15");
//! assert!(document.to_export_text().ends_with("= FINAL TRANSFER AMOUNT: 3,500"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logger;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::RiderbookError;
