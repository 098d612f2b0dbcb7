//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so report text on stdout stays clean for piping.
//! This is separate from the audit log, which records data changes.

use tracing::Level;

/// Level used when the configured one cannot be parsed
pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`)
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Initialize the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logger(log_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(parse_level(log_level))
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
