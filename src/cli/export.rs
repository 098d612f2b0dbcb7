//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::cli::resolve_date;
use crate::error::{RiderbookError, RiderbookResult};
use crate::export::{csv, json, yaml};
use crate::models::date_key;
use crate::services::DayService;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export every stored day as JSON
    Json {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export every stored day as YAML
    Yaml {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export one day's orders and expenses as CSV
    Csv {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Day (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> RiderbookResult<()> {
    match cmd {
        ExportCommands::Json { output, pretty } => {
            let mut writer = create_output(&output)?;
            json::export_full_json(storage, &mut writer, pretty)?;
            finish(writer)?;
            println!("All days exported to: {}", output.display());
        }

        ExportCommands::Yaml { output } => {
            let mut writer = create_output(&output)?;
            yaml::export_full_yaml(storage, &mut writer)?;
            finish(writer)?;
            println!("All days exported to: {}", output.display());
        }

        ExportCommands::Csv { output, date } => {
            let date = resolve_date(date.as_deref())?;
            let key = date_key(date);
            let record = DayService::new(storage).record(date)?;

            let mut writer = create_output(&output)?;
            csv::export_day_csv(&key, &record, &mut writer)?;
            finish(writer)?;
            println!(
                "Exported {} orders and {} expenses for {} to: {}",
                record.orders.len(),
                record.expenses.len(),
                key,
                output.display()
            );
        }
    }

    Ok(())
}

fn create_output(output: &Path) -> RiderbookResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        RiderbookError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> RiderbookResult<()> {
    writer
        .flush()
        .map_err(|e| RiderbookError::Export(e.to_string()))
}
