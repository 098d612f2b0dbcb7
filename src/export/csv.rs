//! CSV Export functionality
//!
//! Exports a day's orders and expenses as one spreadsheet-compatible table.
//! Each row is tagged with its kind so both fit under a single header.

use std::io::Write;

use crate::error::{RiderbookError, RiderbookResult};
use crate::models::DayRecord;

const HEADER: [&str; 10] = [
    "Date",
    "Kind",
    "ID",
    "Description",
    "Location",
    "Rider",
    "Amount",
    "Delivery Fee",
    "Cash",
    "Delivered",
];

/// Export one day's orders and expenses to CSV
pub fn export_day_csv<W: Write>(
    date_key: &str,
    record: &DayRecord,
    writer: W,
) -> RiderbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| RiderbookError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for order in &record.orders {
        csv_writer
            .write_record([
                date_key,
                "order",
                order.id.to_string().as_str(),
                order.item_description.as_str(),
                order.location.as_str(),
                order.rider_tag.as_str(),
                order.client_price.to_decimal_string().as_str(),
                order.delivery_fee.to_decimal_string().as_str(),
                bool_cell(order.is_cash),
                bool_cell(order.is_delivered),
            ])
            .map_err(export_err)?;
    }

    for expense in &record.expenses {
        csv_writer
            .write_record([
                date_key,
                "expense",
                expense.id.to_string().as_str(),
                expense.description.as_str(),
                "",
                "",
                expense.amount.to_decimal_string().as_str(),
                "",
                "",
                "",
            ])
            .map_err(export_err)?;
    }

    if !record.cash_with_riders.is_zero() {
        csv_writer
            .write_record([
                date_key,
                "rider_cash",
                "",
                "Cash with riders",
                "",
                "",
                record.cash_with_riders.to_decimal_string().as_str(),
                "",
                "",
                "",
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| RiderbookError::Export(e.to_string()))?;
    Ok(())
}

fn bool_cell(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
