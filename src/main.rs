use anyhow::Result;
use clap::{Parser, Subcommand};

use riderbook::cli::{
    handle_audit_command, handle_cash_command, handle_expense_command, handle_export_command,
    handle_order_command, handle_report_command, CashCommands, ExpenseCommands, ExportCommands,
    OrderCommands, ReportCommands,
};
use riderbook::config::{paths::RiderbookPaths, settings::Settings};
use riderbook::logger::init_logger;
use riderbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "riderbook",
    author = "Kaylee Beyene",
    version,
    about = "Daily bookkeeping and reconciliation for delivery riders",
    long_about = "riderbook records each day's delivery orders, expenses and the cash \
                  riders still hold, and turns them into a reconciliation report you \
                  can read on screen or paste into a chat."
)]
struct Cli {
    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RIDERBOOK_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Delivery order commands
    #[command(subcommand)]
    Order(OrderCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Cash still held by riders
    #[command(subcommand)]
    Cash(CashCommands),

    /// Daily reconciliation report
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to JSON, YAML or CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only show changes to this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RiderbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logger(cli.log_level.as_deref().unwrap_or(&settings.log_level));

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing riderbook at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Record the day with 'riderbook order add' and 'riderbook expense add',");
            println!("then run 'riderbook report show'.");
        }
        Some(Commands::Config) => {
            println!("riderbook Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.days_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Log level:         {}", settings.log_level);
            println!(
                "  Clipboard command: {}",
                settings
                    .clipboard_command
                    .as_deref()
                    .unwrap_or("(platform default)")
            );
            println!("  Audit enabled:     {}", settings.audit_enabled);
            if !paths.is_initialized() {
                println!();
                println!("Not initialized yet; run 'riderbook init' to save these settings.");
            }
        }
        Some(Commands::Order(cmd)) => {
            handle_order_command(&storage, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, cmd)?;
        }
        Some(Commands::Cash(cmd)) => {
            handle_cash_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Audit { limit, date }) => {
            handle_audit_command(&storage, limit, date.as_deref())?;
        }
        None => {
            println!("riderbook - daily bookkeeping for delivery riders");
            println!();
            println!("Run 'riderbook --help' for usage information.");
        }
    }

    Ok(())
}
