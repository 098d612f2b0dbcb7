//! Display formatting for terminal output
//!
//! Renders daily reports (screen view and clipboard text) and the order
//! and expense listings used while entering data.

pub mod day;
pub mod format;
pub mod report;

pub use day::{format_expense_list, format_order_list};
pub use report::{
    render_display, render_export_text, DisplayBody, DisplayDocument, GroupBlock, LineItem,
    ReconciliationStep, Section, StepKind,
};
