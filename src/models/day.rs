//! Day record model
//!
//! Everything entered for one calendar day lives in a single `DayRecord`,
//! stored under a `YYYY-MM-DD` date key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::money::Money;
use super::order::Order;

/// Format used for date keys
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Orders, expenses and outstanding rider cash for one date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayRecord {
    /// Orders in entry order
    pub orders: Vec<Order>,

    /// Expenses in entry order
    pub expenses: Vec<Expense>,

    /// Cash still held by riders; each settlement overwrites the last
    pub cash_with_riders: Money,
}

impl DayRecord {
    /// Nothing has been entered for the day
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.expenses.is_empty() && self.cash_with_riders.is_zero()
    }

    /// Resolve an order reference: a 1-based position or an order ID
    pub fn order_index(&self, reference: &str) -> Option<usize> {
        resolve_reference(reference, self.orders.len(), |i| {
            self.orders[i].id.matches(reference)
        })
    }

    /// Resolve an expense reference: a 1-based position or an expense ID
    pub fn expense_index(&self, reference: &str) -> Option<usize> {
        resolve_reference(reference, self.expenses.len(), |i| {
            self.expenses[i].id.matches(reference)
        })
    }
}

// Numbers outside 1..=len fall through to ID matching; a short ID can be all digits
fn resolve_reference(
    reference: &str,
    len: usize,
    id_matches: impl Fn(usize) -> bool,
) -> Option<usize> {
    match reference.trim().parse::<usize>() {
        Ok(position) if (1..=len).contains(&position) => Some(position - 1),
        _ => (0..len).find(|&i| id_matches(i)),
    }
}

/// Storage key for a date
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse and normalize a user-supplied date key
pub fn parse_date_key(s: &str) -> Result<NaiveDate, DateKeyError> {
    NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT)
        .map_err(|_| DateKeyError(s.trim().to_string()))
}

/// A date key that is not `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKeyError(pub String);

impl fmt::Display for DateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid date '{}'. Use YYYY-MM-DD", self.0)
    }
}

impl std::error::Error for DateKeyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, OrderId};
    use uuid::Uuid;

    fn sample_day() -> DayRecord {
        DayRecord {
            orders: vec![
                Order::new("Shoes", Money::from_units(5000), "R1", "Ikeja"),
                Order::new("Bag", Money::from_units(3000), "R2", "Yaba"),
            ],
            expenses: vec![Expense::new("Fuel", Money::from_units(1000))],
            cash_with_riders: Money::zero(),
        }
    }

    #[test]
    fn test_empty_day() {
        let mut day = DayRecord::default();
        assert!(day.is_empty());

        day.cash_with_riders = Money::from_units(500);
        assert!(!day.is_empty());
    }

    #[test]
    fn test_order_index_by_position() {
        let day = sample_day();
        assert_eq!(day.order_index("1"), Some(0));
        assert_eq!(day.order_index("2"), Some(1));
        assert_eq!(day.order_index("0"), None);
        assert_eq!(day.order_index("3"), None);
    }

    #[test]
    fn test_order_index_by_id() {
        let day = sample_day();
        let reference = day.orders[1].id.to_string();
        assert_eq!(day.order_index(&reference), Some(1));
        assert_eq!(day.order_index("ord-zzzzzzzz"), None);
    }

    #[test]
    fn test_all_digit_short_id_resolves() {
        let mut day = sample_day();
        let uuid = Uuid::parse_str("12345678-9abc-4def-8123-456789abcdef").unwrap();
        day.orders[1].id = OrderId::from(uuid);

        assert_eq!(day.order_index("12345678"), Some(1));
        assert_eq!(day.order_index("ord-12345678"), Some(1));
        assert_eq!(day.order_index("2"), Some(1));
        assert_eq!(day.order_index("87654321"), None);
    }

    #[test]
    fn test_expense_index() {
        let day = sample_day();
        assert_eq!(day.expense_index("1"), Some(0));
        let full = day.expenses[0].id.as_uuid().to_string();
        assert_eq!(day.expense_index(&full), Some(0));
    }

    #[test]
    fn test_date_keys() {
        let date = parse_date_key(" 2025-01-15 ").unwrap();
        assert_eq!(date_key(date), "2025-01-15");
        assert!(parse_date_key("15/01/2025").is_err());
        assert_eq!(
            parse_date_key("nope").unwrap_err().to_string(),
            "Invalid date 'nope'. Use YYYY-MM-DD"
        );
    }

    #[test]
    fn test_partial_record_deserializes() {
        let day: DayRecord = serde_json::from_str(r#"{"cash_with_riders": 50000}"#).unwrap();
        assert!(day.orders.is_empty());
        assert_eq!(day.cash_with_riders, Money::from_units(500));
    }
}
