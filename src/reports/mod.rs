//! Reports module for riderbook
//!
//! Aggregates a day's orders and expenses into the reconciliation model
//! that the display layer renders.

pub mod daily;

pub use daily::{aggregate, DailyReport, ReportModel, RiderGroup, RiderKey};
