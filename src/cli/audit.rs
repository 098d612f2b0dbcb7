//! Audit log CLI command

use crate::error::RiderbookResult;
use crate::models::date_key;
use crate::storage::Storage;

use super::resolve_date;

/// Print the most recent audit entries, oldest first
///
/// With `date`, only changes to that day are shown.
pub fn handle_audit_command(
    storage: &Storage,
    limit: usize,
    date: Option<&str>,
) -> RiderbookResult<()> {
    let Some(logger) = storage.audit_log() else {
        println!("Audit logging is disabled (audit_enabled = false in config.json).");
        return Ok(());
    };

    let day = date
        .map(|d| resolve_date(Some(d)).map(date_key))
        .transpose()?;

    let entries = logger.read_recent(limit, day.as_deref())?;
    if entries.is_empty() {
        match &day {
            Some(key) => println!("No changes recorded for {}.", key),
            None => println!("No changes recorded yet."),
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
