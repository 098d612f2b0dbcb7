//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod cash;
pub mod expense;
pub mod export;
pub mod order;
pub mod report;

pub use audit::handle_audit_command;
pub use cash::{handle_cash_command, CashCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use order::{handle_order_command, OrderCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::{Local, NaiveDate};

use crate::error::{RiderbookError, RiderbookResult};
use crate::models::{parse_date_key, Money};

/// The day a command works on: `--date YYYY-MM-DD`, else today (local time)
pub fn resolve_date(date: Option<&str>) -> RiderbookResult<NaiveDate> {
    match date {
        Some(s) => parse_date_key(s).map_err(|e| RiderbookError::Validation(e.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

/// clap value parser for amounts
pub fn parse_money_arg(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date() {
        assert_eq!(
            resolve_date(Some("2025-01-15")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(resolve_date(Some("15/01/2025")).unwrap_err().is_validation());
        assert_eq!(resolve_date(None).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_parse_money_arg() {
        assert_eq!(parse_money_arg("5,000").unwrap(), Money::from_units(5000));
        assert!(parse_money_arg("five").is_err());
    }
}
