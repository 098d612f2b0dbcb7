//! Audit logging for riderbook
//!
//! Records every create, update and delete of orders, expenses and rider
//! cash, with before/after values, in an append-only JSONL log.
//!
//! # Example
//!
//! ```rust,ignore
//! use riderbook::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Order,
//!     "2025-01-15",
//!     order.id.to_string(),
//!     Some(order.item_description.clone()),
//!     &order,
//! );
//! logger.append(&entry)?;
//! let today = logger.read_day("2025-01-15")?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
