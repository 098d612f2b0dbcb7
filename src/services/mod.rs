//! Service layer for riderbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and audit logging for every change to a day.

pub mod day;
pub mod expense;
pub mod order;

pub use day::DayService;
pub use expense::{ExpenseService, ExpenseUpdate};
pub use order::{OrderService, OrderUpdate};
