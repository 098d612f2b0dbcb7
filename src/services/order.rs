//! Order service
//!
//! Validates and records delivery orders against a day, with audit logging.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{RiderbookError, RiderbookResult};
use crate::models::{date_key, Money, Order};
use crate::storage::{DayStore, Storage};

/// Field replacements for an existing order; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub item_description: Option<String>,
    pub client_price: Option<Money>,
    pub delivery_fee: Option<Money>,
    pub rider_tag: Option<String>,
    pub location: Option<String>,
    pub is_cash: Option<bool>,
    pub is_delivered: Option<bool>,
}

impl OrderUpdate {
    pub fn is_empty(&self) -> bool {
        self.item_description.is_none()
            && self.client_price.is_none()
            && self.delivery_fee.is_none()
            && self.rider_tag.is_none()
            && self.location.is_none()
            && self.is_cash.is_none()
            && self.is_delivered.is_none()
    }

    fn apply(self, order: &mut Order) {
        if let Some(item) = self.item_description {
            order.item_description = item.trim().to_string();
        }
        if let Some(price) = self.client_price {
            order.client_price = price;
        }
        if let Some(fee) = self.delivery_fee {
            order.delivery_fee = fee;
        }
        if let Some(rider) = self.rider_tag {
            order.rider_tag = rider.trim().to_string();
        }
        if let Some(location) = self.location {
            order.location = location.trim().to_string();
        }
        if let Some(is_cash) = self.is_cash {
            order.is_cash = is_cash;
        }
        if let Some(is_delivered) = self.is_delivered {
            order.is_delivered = is_delivered;
        }
    }
}

/// Service for order management
pub struct OrderService<'a> {
    storage: &'a Storage,
}

impl<'a> OrderService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append an order to the day
    pub fn add(&self, date: NaiveDate, order: Order) -> RiderbookResult<Order> {
        let key = date_key(date);
        let order = Order {
            item_description: order.item_description.trim().to_string(),
            rider_tag: order.rider_tag.trim().to_string(),
            location: order.location.trim().to_string(),
            ..order
        };

        order
            .validate()
            .map_err(|e| RiderbookError::Validation(e.to_string()))?;

        let mut record = self.storage.days.load(&key)?;
        record.orders.push(order.clone());
        self.storage.days.save(&key, record)?;

        self.storage.log_create(
            EntityType::Order,
            &key,
            order.id.to_string(),
            Some(order.item_description.clone()),
            &order,
        )?;

        info!(date_key = %key, order = %order.id, "order added");
        Ok(order)
    }

    /// All orders of the day in entry order, delivered or not
    pub fn list(&self, date: NaiveDate) -> RiderbookResult<Vec<Order>> {
        Ok(self.storage.days.load(&date_key(date))?.orders)
    }

    /// Find an order by 1-based position or ID
    pub fn find(&self, date: NaiveDate, reference: &str) -> RiderbookResult<Order> {
        let record = self.storage.days.load(&date_key(date))?;
        record
            .order_index(reference)
            .map(|i| record.orders[i].clone())
            .ok_or_else(|| RiderbookError::order_not_found(reference))
    }

    /// Replace fields of an existing order in place
    pub fn update(
        &self,
        date: NaiveDate,
        reference: &str,
        update: OrderUpdate,
    ) -> RiderbookResult<Order> {
        if update.is_empty() {
            return Err(RiderbookError::Validation(
                "Nothing to update: pass at least one field".into(),
            ));
        }

        let key = date_key(date);
        let mut record = self.storage.days.load(&key)?;
        let index = record
            .order_index(reference)
            .ok_or_else(|| RiderbookError::order_not_found(reference))?;

        let before = record.orders[index].clone();
        let mut after = before.clone();
        update.apply(&mut after);
        after
            .validate()
            .map_err(|e| RiderbookError::Validation(e.to_string()))?;

        record.orders[index] = after.clone();
        self.storage.days.save(&key, record)?;

        self.storage.log_update(
            EntityType::Order,
            &key,
            after.id.to_string(),
            Some(after.item_description.clone()),
            &before,
            &after,
        )?;

        info!(date_key = %key, order = %after.id, "order updated");
        Ok(after)
    }

    /// Remove an order from the day
    pub fn delete(&self, date: NaiveDate, reference: &str) -> RiderbookResult<Order> {
        let key = date_key(date);
        let mut record = self.storage.days.load(&key)?;
        let index = record
            .order_index(reference)
            .ok_or_else(|| RiderbookError::order_not_found(reference))?;

        let removed = record.orders.remove(index);
        self.storage.days.save(&key, record)?;

        self.storage.log_delete(
            EntityType::Order,
            &key,
            removed.id.to_string(),
            Some(removed.item_description.clone()),
            &removed,
        )?;

        info!(date_key = %key, order = %removed.id, "order deleted");
        Ok(removed)
    }
}
