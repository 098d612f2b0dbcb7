//! Clipboard hand-off for the report export text
//!
//! Copying never fails the command: the outcome is reported back to the
//! caller as `CopyOutcome`, and stored data is never touched.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::display::DisplayDocument;
use crate::error::{RiderbookError, RiderbookResult};

/// Result of handing text to a clipboard sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Something that accepts the export text
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> RiderbookResult<()>;

    /// Where the text ends up, for user messages
    fn describe(&self) -> String;
}

/// The platform clipboard, reached through a clipboard command
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Use the configured command, or the platform default
    pub fn new(command_override: Option<&str>) -> RiderbookResult<Self> {
        match command_override {
            Some(command) => Self::from_command_line(command),
            None => Ok(Self::platform_default()),
        }
    }

    /// Parse a whitespace-separated command line such as `xclip -selection clipboard`
    pub fn from_command_line(command: &str) -> RiderbookResult<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| RiderbookError::Config("Clipboard command is empty".into()))?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    fn platform_default() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("pbcopy", &[])
        } else if cfg!(windows) {
            ("clip", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            ("wl-copy", &[])
        } else {
            ("xclip", &["-selection", "clipboard"])
        };

        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> RiderbookResult<()> {
        debug!(program = %self.program, "spawning clipboard command");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RiderbookError::Clipboard(format!("{}: {}", self.program, e)))?;

        // stdin is dropped at the end of the arm so the command sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin unavailable")),
        };

        let output = child
            .wait_with_output()
            .map_err(|e| RiderbookError::Clipboard(format!("{}: {}", self.program, e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RiderbookError::Clipboard(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        written.map_err(|e| RiderbookError::Clipboard(format!("{}: {}", self.program, e)))
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}

/// Writes the text to a file instead of the clipboard
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClipboardSink for FileSink {
    fn write_text(&self, text: &str) -> RiderbookResult<()> {
        let mut contents = text.to_string();
        contents.push('\n');
        std::fs::write(&self.path, contents)
            .map_err(|e| RiderbookError::Clipboard(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Hand a report's export text to the sink
///
/// Documents without data are never copied.
pub fn copy_report(document: &DisplayDocument, sink: &dyn ClipboardSink) -> CopyOutcome {
    if !document.is_exportable() {
        return CopyOutcome::Failed(format!("No data recorded for {}", document.date_key));
    }

    match sink.write_text(&document.to_export_text()) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            warn!(target_sink = %sink.describe(), error = %e, "copy failed");
            CopyOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render_display;
    use crate::models::{DayRecord, Money, Order};
    use crate::reports::aggregate;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct MemorySink {
        text: RefCell<Option<String>>,
    }

    impl ClipboardSink for MemorySink {
        fn write_text(&self, text: &str) -> RiderbookResult<()> {
            *self.text.borrow_mut() = Some(text.to_string());
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".into()
        }
    }

    struct BrokenSink;

    impl ClipboardSink for BrokenSink {
        fn write_text(&self, _text: &str) -> RiderbookResult<()> {
            Err(RiderbookError::Clipboard("no display".into()))
        }

        fn describe(&self) -> String {
            "broken".into()
        }
    }

    fn document() -> DisplayDocument {
        let record = DayRecord {
            orders: vec![Order::new("Shoes", Money::from_units(5000), "R1", "Ikeja")],
            ..DayRecord::default()
        };
        render_display(&aggregate(&record), "2025-01-15")
    }

    #[test]
    fn test_copy_writes_export_text() {
        let sink = MemorySink {
            text: RefCell::new(None),
        };
        let doc = document();

        assert_eq!(copy_report(&doc, &sink), CopyOutcome::Copied);
        assert_eq!(sink.text.borrow().as_deref(), Some(doc.to_export_text().as_str()));
    }

    #[test]
    fn test_failure_is_reported() {
        let outcome = copy_report(&document(), &BrokenSink);
        assert!(!outcome.is_copied());
        assert!(matches!(outcome, CopyOutcome::Failed(reason) if reason.contains("no display")));
    }

    #[test]
    fn test_no_data_is_not_copied() {
        let sink = MemorySink {
            text: RefCell::new(None),
        };
        let doc = render_display(&aggregate(&DayRecord::default()), "2025-01-15");

        assert!(!copy_report(&doc, &sink).is_copied());
        assert!(sink.text.borrow().is_none());
    }

    #[test]
    fn test_file_sink() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");
        let doc = document();

        assert!(copy_report(&doc, &FileSink::new(&path)).is_copied());
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim_end(), doc.to_export_text());
    }

    #[test]
    fn test_missing_command_fails() {
        let sink = SystemClipboard::from_command_line("riderbook-no-such-clipboard-tool").unwrap();
        assert!(!copy_report(&document(), &sink).is_copied());
        assert!(SystemClipboard::from_command_line("   ").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_receives_text() {
        let sink = SystemClipboard::from_command_line("cat").unwrap();
        assert!(copy_report(&document(), &sink).is_copied());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_that_stops_reading_fails() {
        // More than a pipe buffer, so the write hits a closed pipe
        let text = "x".repeat(1 << 20);
        let err = SystemClipboard::from_command_line("true")
            .unwrap()
            .write_text(&text)
            .unwrap_err();
        assert!(matches!(err, RiderbookError::Clipboard(msg) if msg.starts_with("true: ")));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_exit_status_is_reported() {
        let err = SystemClipboard::from_command_line("false")
            .unwrap()
            .write_text("report")
            .unwrap_err();
        assert!(err.to_string().contains("false exited with"));
    }
}
