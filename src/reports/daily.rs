//! Daily reconciliation report
//!
//! Groups the day's delivered orders by location and rider, and walks the
//! reconciliation from client funds down to the amount to transfer:
//!
//! ```text
//! balance_before_rider_cash = total_client_funds - total_expenses
//! final_transfer_amount     = balance_before_rider_cash - cash_with_riders
//! ```
//!
//! Aggregation is a pure function of the `DayRecord`. Amounts are summed
//! exactly as entered, negative values included.

use std::collections::HashMap;
use std::fmt;

use crate::error::RiderbookResult;
use crate::models::{DayRecord, Expense, Money, Order};
use crate::storage::DayStore;

/// Composite key that delivered orders are grouped under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RiderKey {
    pub location: String,
    pub rider_tag: String,
}

impl RiderKey {
    fn of(order: &Order) -> Self {
        Self {
            location: order.location.clone(),
            rider_tag: order.rider_tag.clone(),
        }
    }
}

impl fmt::Display for RiderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.location, self.rider_tag)
    }
}

/// Delivered orders sharing one location and rider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderGroup {
    pub key: RiderKey,
    /// Orders in entry order
    pub orders: Vec<Order>,
    /// Sum of `client_price` over `orders`
    pub subtotal: Money,
}

/// Everything the renderer needs for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportModel {
    /// Groups in order of first appearance
    pub groups: Vec<RiderGroup>,
    /// Expenses in entry order
    pub expenses: Vec<Expense>,
    pub total_client_funds: Money,
    pub total_expenses: Money,
    pub balance_before_rider_cash: Money,
    pub cash_with_riders: Money,
    pub final_transfer_amount: Money,
    /// False when the day has no orders, no expenses and no rider cash
    pub has_data: bool,
}

impl ReportModel {
    /// Number of delivered orders across all groups
    pub fn delivered_count(&self) -> usize {
        self.groups.iter().map(|g| g.orders.len()).sum()
    }
}

/// Aggregate a day's records into a report model
pub fn aggregate(record: &DayRecord) -> ReportModel {
    let mut groups: Vec<RiderGroup> = Vec::new();
    let mut positions: HashMap<RiderKey, usize> = HashMap::new();
    let mut total_client_funds = Money::zero();

    for order in record.orders.iter().filter(|o| o.is_delivered) {
        let key = RiderKey::of(order);
        let index = *positions.entry(key.clone()).or_insert_with(|| {
            groups.push(RiderGroup {
                key,
                orders: Vec::new(),
                subtotal: Money::zero(),
            });
            groups.len() - 1
        });

        let group = &mut groups[index];
        group.subtotal += order.client_price;
        group.orders.push(order.clone());
        total_client_funds += order.client_price;
    }

    let total_expenses: Money = record.expenses.iter().map(|e| e.amount).sum();
    let balance_before_rider_cash = total_client_funds - total_expenses;
    let final_transfer_amount = balance_before_rider_cash - record.cash_with_riders;

    ReportModel {
        groups,
        expenses: record.expenses.clone(),
        total_client_funds,
        total_expenses,
        balance_before_rider_cash,
        cash_with_riders: record.cash_with_riders,
        final_transfer_amount,
        has_data: !record.is_empty(),
    }
}

/// A day's report, loaded from storage
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date_key: String,
    pub model: ReportModel,
}

impl DailyReport {
    /// Load the day from the store and aggregate it
    pub fn generate(store: &impl DayStore, date_key: &str) -> RiderbookResult<Self> {
        let record = store.load(date_key)?;
        Ok(Self {
            date_key: date_key.to_string(),
            model: aggregate(&record),
        })
    }
}
