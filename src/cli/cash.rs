//! Cash-with-riders CLI commands

use clap::Subcommand;

use crate::cli::{parse_money_arg, resolve_date};
use crate::error::RiderbookResult;
use crate::models::{date_key, Money};
use crate::services::DayService;
use crate::storage::Storage;

/// Cash subcommands
#[derive(Subcommand)]
pub enum CashCommands {
    /// Set the cash riders still hold (replaces the previous value)
    Set {
        /// Amount outstanding with riders
        #[arg(value_parser = parse_money_arg, allow_negative_numbers = true)]
        amount: Money,
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the cash riders still hold
    Show {
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a cash command
pub fn handle_cash_command(storage: &Storage, cmd: CashCommands) -> RiderbookResult<()> {
    let service = DayService::new(storage);

    match cmd {
        CashCommands::Set { amount, date } => {
            let date = resolve_date(date.as_deref())?;
            let previous = service.set_cash_with_riders(date, amount)?;
            println!(
                "Cash with riders on {}: {} (was {})",
                date_key(date),
                amount,
                previous
            );
        }

        CashCommands::Show { date } => {
            let date = resolve_date(date.as_deref())?;
            let record = service.record(date)?;
            println!(
                "Cash with riders on {}: {}",
                date_key(date),
                record.cash_with_riders
            );
        }
    }

    Ok(())
}
