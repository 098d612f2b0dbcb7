//! Delivery order model
//!
//! An order is one item taken out by a rider to a drop-off location. Only
//! delivered orders count towards the day's client funds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::OrderId;
use super::money::Money;

fn default_delivered() -> bool {
    true
}

/// A delivery order recorded for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: OrderId,

    /// What was delivered
    pub item_description: String,

    /// Amount charged to the client
    pub client_price: Money,

    /// Delivery fee (informational, never summed into totals)
    #[serde(default)]
    pub delivery_fee: Money,

    /// Rider who carried the order
    pub rider_tag: String,

    /// Drop-off location
    pub location: String,

    /// Client paid in cash (annotation only)
    #[serde(default)]
    pub is_cash: bool,

    /// Undelivered orders are excluded from every report
    #[serde(default = "default_delivered")]
    pub is_delivered: bool,

    /// When the order was entered
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new delivered, non-cash order with no delivery fee
    pub fn new(
        item_description: impl Into<String>,
        client_price: Money,
        rider_tag: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: OrderId::new(),
            item_description: item_description.into(),
            client_price,
            delivery_fee: Money::zero(),
            rider_tag: rider_tag.into(),
            location: location.into(),
            is_cash: false,
            is_delivered: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_delivery_fee(mut self, fee: Money) -> Self {
        self.delivery_fee = fee;
        self
    }

    pub fn with_cash(mut self, is_cash: bool) -> Self {
        self.is_cash = is_cash;
        self
    }

    pub fn with_delivered(mut self, is_delivered: bool) -> Self {
        self.is_delivered = is_delivered;
        self
    }

    /// Validate presence and sign of the entered fields
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.item_description.trim().is_empty() {
            return Err(OrderValidationError::EmptyField("item description"));
        }
        if self.rider_tag.trim().is_empty() {
            return Err(OrderValidationError::EmptyField("rider tag"));
        }
        if self.location.trim().is_empty() {
            return Err(OrderValidationError::EmptyField("location"));
        }
        if self.client_price.is_negative() {
            return Err(OrderValidationError::NegativeAmount("client price"));
        }
        if self.delivery_fee.is_negative() {
            return Err(OrderValidationError::NegativeAmount("delivery fee"));
        }
        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.item_description, self.client_price, self.delivery_fee
        )?;
        if self.is_cash {
            write!(f, " (cash)")?;
        }
        Ok(())
    }
}

/// Validation errors for orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    EmptyField(&'static str),
    NegativeAmount(&'static str),
}

impl fmt::Display for OrderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Order {} cannot be empty", field),
            Self::NegativeAmount(field) => write!(f, "Order {} cannot be negative", field),
        }
    }
}

impl std::error::Error for OrderValidationError {}
