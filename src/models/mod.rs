//! Core data models for riderbook
//!
//! This module contains the records entered during a day: delivery orders,
//! expenses, and the day record that holds them alongside rider cash.

pub mod day;
pub mod expense;
pub mod ids;
pub mod money;
pub mod order;

pub use day::{date_key, parse_date_key, DayRecord};
pub use expense::Expense;
pub use ids::{ExpenseId, OrderId};
pub use money::Money;
pub use order::Order;
