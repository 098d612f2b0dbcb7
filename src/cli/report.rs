//! Report CLI commands
//!
//! Shows the daily reconciliation report and hands its export text to the
//! clipboard.

use std::path::PathBuf;

use clap::Subcommand;

use crate::cli::resolve_date;
use crate::config::settings::Settings;
use crate::display::{render_display, DisplayDocument};
use crate::error::RiderbookResult;
use crate::export::{copy_report, ClipboardSink, CopyOutcome, FileSink, SystemClipboard};
use crate::services::DayService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show the daily report
    Show {
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Print the clipboard text instead of the screen layout
        #[arg(long)]
        plain: bool,
    },
    /// Copy the report text to the clipboard
    Copy {
        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Write the text to this file instead of the clipboard
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> RiderbookResult<()> {
    match cmd {
        ReportCommands::Show { date, plain } => {
            let document = load_document(storage, date.as_deref())?;
            if plain {
                println!("{}", document.to_export_text());
            } else {
                print!("{}", document.format_terminal());
            }
        }

        ReportCommands::Copy { date, output } => {
            let document = load_document(storage, date.as_deref())?;
            if !document.is_exportable() {
                println!("{}", document.to_export_text());
                println!("Nothing to copy.");
                return Ok(());
            }

            let sink: Box<dyn ClipboardSink> = match output {
                Some(path) => Box::new(FileSink::new(path)),
                None => Box::new(SystemClipboard::new(settings.clipboard_command.as_deref())?),
            };

            match copy_report(&document, sink.as_ref()) {
                CopyOutcome::Copied => {
                    println!(
                        "Report for {} copied to {}",
                        document.date_key,
                        sink.describe()
                    );
                }
                CopyOutcome::Failed(reason) => {
                    eprintln!("Could not copy the report: {}", reason);
                    eprintln!("Use 'riderbook report show --plain' to print it instead.");
                }
            }
        }
    }

    Ok(())
}

fn load_document(storage: &Storage, date: Option<&str>) -> RiderbookResult<DisplayDocument> {
    let date = resolve_date(date)?;
    let report = DayService::new(storage).report(date)?;
    Ok(render_display(&report.model, &report.date_key))
}
