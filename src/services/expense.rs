//! Expense service
//!
//! Records money paid out during a day.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{RiderbookError, RiderbookResult};
use crate::models::{date_key, Expense, Money};
use crate::storage::{DayStore, Storage};

/// Field replacements for an existing expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append an expense to the day
    pub fn add(
        &self,
        date: NaiveDate,
        description: &str,
        amount: Money,
    ) -> RiderbookResult<Expense> {
        let key = date_key(date);
        let expense = Expense::new(description.trim(), amount);
        expense
            .validate()
            .map_err(|e| RiderbookError::Validation(e.to_string()))?;

        let mut record = self.storage.days.load(&key)?;
        record.expenses.push(expense.clone());
        self.storage.days.save(&key, record)?;

        self.storage.log_create(
            EntityType::Expense,
            &key,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        info!(date_key = %key, expense = %expense.id, "expense added");
        Ok(expense)
    }

    pub fn list(&self, date: NaiveDate) -> RiderbookResult<Vec<Expense>> {
        Ok(self.storage.days.load(&date_key(date))?.expenses)
    }

    pub fn update(
        &self,
        date: NaiveDate,
        reference: &str,
        update: ExpenseUpdate,
    ) -> RiderbookResult<Expense> {
        if update.description.is_none() && update.amount.is_none() {
            return Err(RiderbookError::Validation(
                "Nothing to update: pass a description or an amount".into(),
            ));
        }

        let key = date_key(date);
        let mut record = self.storage.days.load(&key)?;
        let index = record
            .expense_index(reference)
            .ok_or_else(|| RiderbookError::expense_not_found(reference))?;

        let before = record.expenses[index].clone();
        let mut after = before.clone();
        if let Some(description) = update.description {
            after.description = description.trim().to_string();
        }
        if let Some(amount) = update.amount {
            after.amount = amount;
        }
        after
            .validate()
            .map_err(|e| RiderbookError::Validation(e.to_string()))?;

        record.expenses[index] = after.clone();
        self.storage.days.save(&key, record)?;

        self.storage.log_update(
            EntityType::Expense,
            &key,
            after.id.to_string(),
            Some(after.description.clone()),
            &before,
            &after,
        )?;

        info!(date_key = %key, expense = %after.id, "expense updated");
        Ok(after)
    }

    pub fn delete(&self, date: NaiveDate, reference: &str) -> RiderbookResult<Expense> {
        let key = date_key(date);
        let mut record = self.storage.days.load(&key)?;
        let index = record
            .expense_index(reference)
            .ok_or_else(|| RiderbookError::expense_not_found(reference))?;

        let removed = record.expenses.remove(index);
        self.storage.days.save(&key, record)?;

        self.storage.log_delete(
            EntityType::Expense,
            &key,
            removed.id.to_string(),
            Some(removed.description.clone()),
            &removed,
        )?;

        info!(date_key = %key, expense = %removed.id, "expense deleted");
        Ok(removed)
    }
}
