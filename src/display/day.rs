//! Order and expense listings
//!
//! Unlike the report, listings show every order of the day, delivered or
//! not, with the position and ID used to edit or delete it.

use crate::models::{DayRecord, Expense, Order};

use super::format::{separator, truncate};

/// Format one order as a listing row
pub fn format_order_row(position: usize, order: &Order) -> String {
    let status = if order.is_delivered { "✓" } else { "✗" };
    let cash = if order.is_cash { "cash" } else { "" };

    format!(
        "{:>3} {} {:12} {:20} {:14} {:>10} {:>8} {:4}",
        position,
        status,
        order.id,
        truncate(&order.item_description, 20),
        truncate(&format!("{} ({})", order.location, order.rider_tag), 14),
        order.client_price,
        order.delivery_fee,
        cash
    )
}

/// Format all orders of a day
pub fn format_order_list(date_key: &str, record: &DayRecord) -> String {
    if record.orders.is_empty() {
        return format!("No orders recorded for {}.\n", date_key);
    }

    let mut output = String::new();
    output.push_str(&format!("Orders for {}\n", date_key));
    output.push_str(&format!(
        "{:>3} {} {:12} {:20} {:14} {:>10} {:>8} {:4}\n",
        "#", " ", "ID", "Item", "Rider", "Price", "Fee", ""
    ));
    output.push_str(&separator(80));
    output.push('\n');

    for (i, order) in record.orders.iter().enumerate() {
        output.push_str(&format_order_row(i + 1, order));
        output.push('\n');
    }

    let undelivered = record.orders.iter().filter(|o| !o.is_delivered).count();
    output.push_str(&format!(
        "\n{} orders ({} not delivered)\n",
        record.orders.len(),
        undelivered
    ));

    output
}

pub fn format_expense_row(position: usize, expense: &Expense) -> String {
    format!(
        "{:>3} {:12} {:40} {:>10}",
        position,
        expense.id,
        truncate(&expense.description, 40),
        expense.amount
    )
}

/// Format all expenses of a day
pub fn format_expense_list(date_key: &str, record: &DayRecord) -> String {
    if record.expenses.is_empty() {
        return format!("No expenses recorded for {}.\n", date_key);
    }

    let mut output = String::new();
    output.push_str(&format!("Expenses for {}\n", date_key));
    output.push_str(&format!(
        "{:>3} {:12} {:40} {:>10}\n",
        "#", "ID", "Description", "Amount"
    ));
    output.push_str(&separator(68));
    output.push('\n');

    for (i, expense) in record.expenses.iter().enumerate() {
        output.push_str(&format_expense_row(i + 1, expense));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_order_list_shows_undelivered() {
        let record = DayRecord {
            orders: vec![
                Order::new("Shoes", Money::from_units(5000), "R1", "Ikeja").with_cash(true),
                Order::new("Bag", Money::from_units(3000), "R2", "Yaba").with_delivered(false),
            ],
            ..DayRecord::default()
        };

        let output = format_order_list("2025-01-15", &record);
        assert!(output.contains("Shoes"));
        assert!(output.contains("Bag"));
        assert!(output.contains("5,000"));
        assert!(output.contains("cash"));
        assert!(output.contains("2 orders (1 not delivered)"));
    }

    #[test]
    fn test_empty_lists() {
        let record = DayRecord::default();
        assert_eq!(
            format_order_list("2025-01-15", &record),
            "No orders recorded for 2025-01-15.\n"
        );
        assert_eq!(
            format_expense_list("2025-01-15", &record),
            "No expenses recorded for 2025-01-15.\n"
        );
    }

    #[test]
    fn test_expense_row() {
        let expense = Expense::new("Fuel", Money::from_units(1000));
        let row = format_expense_row(1, &expense);
        assert!(row.starts_with("  1 exp-"));
        assert!(row.ends_with("1,000"));
    }
}
