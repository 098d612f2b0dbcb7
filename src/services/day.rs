//! Day service
//!
//! Day-level operations: reading a whole record, settling cash with riders
//! and building the report for a date.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::RiderbookResult;
use crate::models::{date_key, DayRecord, Money};
use crate::reports::DailyReport;
use crate::storage::{DayStore, Storage};

/// Service for whole-day operations
pub struct DayService<'a> {
    storage: &'a Storage,
}

impl<'a> DayService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Everything recorded for a date (empty if nothing was entered)
    pub fn record(&self, date: NaiveDate) -> RiderbookResult<DayRecord> {
        self.storage.days.load(&date_key(date))
    }

    /// Dates with stored data, ascending
    pub fn recorded_dates(&self) -> RiderbookResult<Vec<String>> {
        self.storage.days.date_keys()
    }

    /// Overwrite the cash still held by riders, returning the previous value
    pub fn set_cash_with_riders(&self, date: NaiveDate, amount: Money) -> RiderbookResult<Money> {
        let key = date_key(date);
        let mut record = self.storage.days.load(&key)?;
        let previous = record.cash_with_riders;

        if previous == amount {
            return Ok(previous);
        }

        record.cash_with_riders = amount;
        self.storage.days.save(&key, record)?;

        self.storage.log_update(
            EntityType::RiderCash,
            &key,
            key.clone(),
            Some(format!("{} -> {}", previous, amount)),
            &previous,
            &amount,
        )?;

        info!(date_key = %key, %previous, %amount, "cash with riders set");
        Ok(previous)
    }

    /// Aggregate the date's record into a report
    pub fn report(&self, date: NaiveDate) -> RiderbookResult<DailyReport> {
        DailyReport::generate(&self.storage.days, &date_key(date))
    }
}
