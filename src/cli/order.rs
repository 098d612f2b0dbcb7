//! Order CLI commands
//!
//! Implements CLI commands for entering and correcting delivery orders.

use clap::Subcommand;

use crate::cli::{parse_money_arg, resolve_date};
use crate::display::format_order_list;
use crate::error::RiderbookResult;
use crate::models::{date_key, Money, Order};
use crate::services::{DayService, OrderService, OrderUpdate};
use crate::storage::Storage;

/// Order subcommands
#[derive(Subcommand)]
pub enum OrderCommands {
    /// Record a delivery order
    Add {
        /// Item description
        #[arg(short, long)]
        item: String,
        /// Price charged to the client
        #[arg(short, long, value_parser = parse_money_arg)]
        price: Money,
        /// Delivery fee (shown on the report, not added to totals)
        #[arg(short, long, value_parser = parse_money_arg)]
        fee: Option<Money>,
        /// Rider tag
        #[arg(short, long)]
        rider: String,
        /// Drop-off location
        #[arg(short, long)]
        location: String,
        /// Client paid the rider in cash
        #[arg(long)]
        cash: bool,
        /// Not delivered yet (left out of the report)
        #[arg(long)]
        undelivered: bool,
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List every order of a day
    #[command(alias = "ls")]
    List {
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Change fields of an order
    Edit {
        /// Position in the day's list, or order ID
        order: String,
        #[arg(short, long)]
        item: Option<String>,
        #[arg(short, long, value_parser = parse_money_arg)]
        price: Option<Money>,
        #[arg(short, long, value_parser = parse_money_arg)]
        fee: Option<Money>,
        #[arg(short, long)]
        rider: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
        /// Paid in cash (true/false)
        #[arg(long)]
        cash: Option<bool>,
        /// Delivered (true/false)
        #[arg(long)]
        delivered: Option<bool>,
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an order
    #[command(alias = "rm")]
    Delete {
        /// Position in the day's list, or order ID
        order: String,
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle an order command
pub fn handle_order_command(storage: &Storage, cmd: OrderCommands) -> RiderbookResult<()> {
    let service = OrderService::new(storage);

    match cmd {
        OrderCommands::Add {
            item,
            price,
            fee,
            rider,
            location,
            cash,
            undelivered,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let order = Order::new(item, price, rider, location)
                .with_delivery_fee(fee.unwrap_or(Money::zero()))
                .with_cash(cash)
                .with_delivered(!undelivered);

            let order = service.add(date, order)?;
            let position = service.list(date)?.len();
            println!(
                "Added order {} ({}) on {}: {} for {} ({})",
                position,
                order.id,
                date_key(date),
                order,
                order.location,
                order.rider_tag
            );
            if !order.is_delivered {
                println!("Marked as not delivered; it stays out of the report until delivered.");
            }
        }

        OrderCommands::List { date } => {
            let date = resolve_date(date.as_deref())?;
            let record = DayService::new(storage).record(date)?;
            print!("{}", format_order_list(&date_key(date), &record));
        }

        OrderCommands::Edit {
            order,
            item,
            price,
            fee,
            rider,
            location,
            cash,
            delivered,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let update = OrderUpdate {
                item_description: item,
                client_price: price,
                delivery_fee: fee,
                rider_tag: rider,
                location,
                is_cash: cash,
                is_delivered: delivered,
            };

            let updated = service.update(date, &order, update)?;
            println!(
                "Updated order {}: {} for {} ({})",
                updated.id, updated, updated.location, updated.rider_tag
            );
        }

        OrderCommands::Delete { order, date } => {
            let date = resolve_date(date.as_deref())?;
            let removed = service.delete(date, &order)?;
            println!("Deleted order {}: {}", removed.id, removed);
        }
    }

    Ok(())
}
