//! Expense CLI commands

use clap::Subcommand;

use crate::cli::{parse_money_arg, resolve_date};
use crate::display::format_expense_list;
use crate::error::RiderbookResult;
use crate::models::{date_key, Money};
use crate::services::{DayService, ExpenseService, ExpenseUpdate};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record money paid out (fuel, repairs, ...)
    Add {
        /// What the money was spent on
        description: String,
        /// Amount paid
        #[arg(value_parser = parse_money_arg)]
        amount: Money,
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List the expenses of a day
    #[command(alias = "ls")]
    List {
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Change an expense
    Edit {
        /// Position in the day's list, or expense ID
        expense: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, value_parser = parse_money_arg)]
        amount: Option<Money>,
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Position in the day's list, or expense ID
        expense: String,
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> RiderbookResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let expense = service.add(date, &description, amount)?;
            println!(
                "Added expense {} ({}) on {}: {}",
                service.list(date)?.len(),
                expense.id,
                date_key(date),
                expense
            );
        }

        ExpenseCommands::List { date } => {
            let date = resolve_date(date.as_deref())?;
            let record = DayService::new(storage).record(date)?;
            print!("{}", format_expense_list(&date_key(date), &record));
        }

        ExpenseCommands::Edit {
            expense,
            description,
            amount,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let updated = service.update(
                date,
                &expense,
                ExpenseUpdate {
                    description,
                    amount,
                },
            )?;
            println!("Updated expense {}: {}", updated.id, updated);
        }

        ExpenseCommands::Delete { expense, date } => {
            let date = resolve_date(date.as_deref())?;
            let removed = service.delete(date, &expense)?;
            println!("Deleted expense {}: {}", removed.id, removed);
        }
    }

    Ok(())
}
