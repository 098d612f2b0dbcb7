//! Daily report rendering
//!
//! A `ReportModel` renders into a `DisplayDocument`: a typed tree of
//! sections with the order and expense line items already numbered. The
//! clipboard export text is written from that same tree, one line per
//! semantic item, so both forms always agree.
//!
//! Delivered orders carry one counter running across every rider group;
//! expenses are numbered separately from 1.

use crate::models::Money;
use crate::reports::ReportModel;

use super::format::{double_separator, right_align, separator};

const SCREEN_WIDTH: usize = 60;

pub const ORDERS_MARKER: &str = "=== DELIVERED ORDERS ===";
pub const EXPENSES_MARKER: &str = "=== EXPENSES ===";
pub const RECONCILIATION_MARKER: &str = "=== RECONCILIATION ===";

/// A numbered order or expense line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub number: usize,
    pub text: String,
}

impl LineItem {
    fn export_line(&self) -> String {
        format!("- {}. {}", self.number, self.text)
    }
}

/// One rider group with its numbered orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBlock {
    pub label: String,
    pub items: Vec<LineItem>,
    pub subtotal: Money,
}

/// Steps of the reconciliation, in the order they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    ClientFunds,
    LessExpenses,
    Balance,
    LessRiderCash,
    FinalTransfer,
}

impl StepKind {
    /// Screen label including the arithmetic sign
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClientFunds => "  Client Funds Collected",
            Self::LessExpenses => "- Total Expenses Paid",
            Self::Balance => "= Balance",
            Self::LessRiderCash => "- Cash with Riders (Outstanding)",
            Self::FinalTransfer => "= FINAL TRANSFER AMOUNT",
        }
    }

    fn export_line(&self, amount: Money) -> String {
        match self {
            Self::ClientFunds => format!("Client Funds Collected ({})", amount),
            Self::LessExpenses => format!("- Total Expenses Paid ({})", amount),
            Self::Balance => format!("= Balance: {}", amount),
            Self::LessRiderCash => format!("- Cash with Riders (Outstanding): {}", amount),
            Self::FinalTransfer => format!("= FINAL TRANSFER AMOUNT: {}", amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconciliationStep {
    pub kind: StepKind,
    pub amount: Money,
}

/// A block of the rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Header {
        date_key: String,
    },
    Orders {
        groups: Vec<GroupBlock>,
        total_sales: Money,
    },
    Expenses {
        items: Vec<LineItem>,
        total: Money,
    },
    Reconciliation {
        steps: Vec<ReconciliationStep>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBody {
    /// Nothing entered for the day
    NoData { message: String },
    Report { sections: Vec<Section> },
}

/// The structured, screen-ready form of a daily report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDocument {
    pub date_key: String,
    pub body: DisplayBody,
}

impl DisplayDocument {
    /// Whether the copy/export action should be offered
    pub fn is_exportable(&self) -> bool {
        matches!(self.body, DisplayBody::Report { .. })
    }

    pub fn sections(&self) -> &[Section] {
        match &self.body {
            DisplayBody::Report { sections } => sections,
            DisplayBody::NoData { .. } => &[],
        }
    }

    /// Final transfer amount, if the document holds a report
    pub fn final_transfer_amount(&self) -> Option<Money> {
        self.sections().iter().find_map(|section| match section {
            Section::Reconciliation { steps } => steps
                .iter()
                .find(|s| s.kind == StepKind::FinalTransfer)
                .map(|s| s.amount),
            _ => None,
        })
    }

    /// Normalized plain text for the clipboard
    pub fn to_export_text(&self) -> String {
        let sections = match &self.body {
            DisplayBody::NoData { message } => return message.clone(),
            DisplayBody::Report { sections } => sections,
        };

        let mut lines: Vec<String> = Vec::new();
        for section in sections {
            match section {
                Section::Header { date_key } => {
                    lines.push(format!("--- DAILY REPORT FOR {} ---", date_key));
                }
                Section::Orders {
                    groups,
                    total_sales,
                } => {
                    lines.push(String::new());
                    lines.push(ORDERS_MARKER.to_string());
                    if groups.is_empty() {
                        lines.push("No delivered orders.".to_string());
                    }
                    for (i, group) in groups.iter().enumerate() {
                        if i > 0 {
                            lines.push(String::new());
                        }
                        lines.push(group.label.clone());
                        lines.extend(group.items.iter().map(LineItem::export_line));
                        lines.push(format!("-- Total for {}: {}", group.label, group.subtotal));
                    }
                    lines.push(String::new());
                    lines.push(format!(
                        "--- TOTAL SALES (Client Funds Collected): {}",
                        total_sales
                    ));
                }
                Section::Expenses { items, total } => {
                    lines.push(String::new());
                    lines.push(EXPENSES_MARKER.to_string());
                    if items.is_empty() {
                        lines.push("No expenses recorded.".to_string());
                    }
                    lines.extend(items.iter().map(LineItem::export_line));
                    lines.push(format!("--- TOTAL EXPENSES: {}", total));
                }
                Section::Reconciliation { steps } => {
                    lines.push(String::new());
                    lines.push(RECONCILIATION_MARKER.to_string());
                    lines.extend(steps.iter().map(|s| s.kind.export_line(s.amount)));
                }
            }
        }

        lines.join("\n").trim().to_string()
    }

    /// Format the document for terminal display
    pub fn format_terminal(&self) -> String {
        let sections = match &self.body {
            DisplayBody::NoData { message } => return format!("{}\n", message),
            DisplayBody::Report { sections } => sections,
        };

        let amount_col = 14;
        let label_col = SCREEN_WIDTH - amount_col;
        let mut output = String::new();

        for section in sections {
            match section {
                Section::Header { date_key } => {
                    output.push_str(&format!("Daily Report: {}\n", date_key));
                    output.push_str(&double_separator(SCREEN_WIDTH));
                    output.push('\n');
                }
                Section::Orders {
                    groups,
                    total_sales,
                } => {
                    output.push_str("\nDELIVERED ORDERS\n");
                    output.push_str(&separator(SCREEN_WIDTH));
                    output.push('\n');
                    if groups.is_empty() {
                        output.push_str("  No delivered orders.\n");
                    }
                    for group in groups {
                        output.push_str(&format!("{}\n", group.label));
                        for item in &group.items {
                            output.push_str(&format!("  {:>3}. {}\n", item.number, item.text));
                        }
                        output.push_str(&format!(
                            "  {:<width$}{}\n\n",
                            format!("Total for {}:", group.label),
                            right_align(&group.subtotal.to_string(), amount_col),
                            width = label_col - 2
                        ));
                    }
                    output.push_str(&format!(
                        "{:<width$}{}\n",
                        "TOTAL SALES (Client Funds Collected):",
                        right_align(&total_sales.to_string(), amount_col),
                        width = label_col
                    ));
                }
                Section::Expenses { items, total } => {
                    output.push_str("\nEXPENSES\n");
                    output.push_str(&separator(SCREEN_WIDTH));
                    output.push('\n');
                    if items.is_empty() {
                        output.push_str("  No expenses recorded.\n");
                    }
                    for item in items {
                        output.push_str(&format!("  {:>3}. {}\n", item.number, item.text));
                    }
                    output.push_str(&format!(
                        "{:<width$}{}\n",
                        "TOTAL EXPENSES:",
                        right_align(&total.to_string(), amount_col),
                        width = label_col
                    ));
                }
                Section::Reconciliation { steps } => {
                    output.push_str("\nRECONCILIATION\n");
                    output.push_str(&separator(SCREEN_WIDTH));
                    output.push('\n');
                    for step in steps {
                        if step.kind == StepKind::FinalTransfer {
                            output.push_str(&separator(SCREEN_WIDTH));
                            output.push('\n');
                        }
                        output.push_str(&format!(
                            "{:<width$}{}\n",
                            step.kind.label(),
                            right_align(&step.amount.to_string(), amount_col),
                            width = label_col
                        ));
                    }
                }
            }
        }

        output
    }
}

/// Free text is shown on one line no matter what was typed
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render the structured display form of a report
pub fn render_display(model: &ReportModel, date_key: &str) -> DisplayDocument {
    let date_key = single_line(date_key);

    if !model.has_data {
        return DisplayDocument {
            body: DisplayBody::NoData {
                message: format!(
                    "No data recorded for {}. Start adding orders and expenses.",
                    date_key
                ),
            },
            date_key,
        };
    }

    let mut number = 0;
    let groups = model
        .groups
        .iter()
        .map(|group| GroupBlock {
            label: single_line(&group.key.to_string()),
            items: group
                .orders
                .iter()
                .map(|order| {
                    number += 1;
                    LineItem {
                        number,
                        text: single_line(&order.to_string()),
                    }
                })
                .collect(),
            subtotal: group.subtotal,
        })
        .collect();

    let expenses = model
        .expenses
        .iter()
        .enumerate()
        .map(|(i, expense)| LineItem {
            number: i + 1,
            text: single_line(&expense.to_string()),
        })
        .collect();

    let steps = [
        (StepKind::ClientFunds, model.total_client_funds),
        (StepKind::LessExpenses, model.total_expenses),
        (StepKind::Balance, model.balance_before_rider_cash),
        (StepKind::LessRiderCash, model.cash_with_riders),
        (StepKind::FinalTransfer, model.final_transfer_amount),
    ]
    .into_iter()
    .map(|(kind, amount)| ReconciliationStep { kind, amount })
    .collect();

    DisplayDocument {
        body: DisplayBody::Report {
            sections: vec![
                Section::Header {
                    date_key: date_key.clone(),
                },
                Section::Orders {
                    groups,
                    total_sales: model.total_client_funds,
                },
                Section::Expenses {
                    items: expenses,
                    total: model.total_expenses,
                },
                Section::Reconciliation { steps },
            ],
        },
        date_key,
    }
}

/// Render the clipboard-ready plain text of a report
pub fn render_export_text(model: &ReportModel, date_key: &str) -> String {
    render_display(model, date_key).to_export_text()
}
