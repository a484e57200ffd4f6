//! Progress logger for crew pipeline stages.
//!
//! The assembly functions stay pure: all human-facing progress lines go
//! through an injected `Logger`, and a quiet logger (the default) turns the
//! whole thing into a no-op for library callers and tests.

use chrono::Local;

use crate::utilities::printer::{Printer, PrinterColor};

/// Logger with optional verbose output and timestamps.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    /// Enables verbose logging with timestamps.
    pub verbose: bool,
    /// Internal printer.
    printer: Printer,
}

impl Logger {
    /// Create a new `Logger`.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            printer: Printer::new(),
        }
    }

    /// Log a message with timestamp if verbose mode is enabled.
    ///
    /// # Arguments
    /// * `level` - The log level (e.g., "info", "warning", "error").
    /// * `message` - The message to log.
    /// * `color` - Optional color override for the message.
    pub fn log(&self, level: &str, message: &str, color: Option<PrinterColor>) {
        if self.verbose {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let color = color.unwrap_or(PrinterColor::BoldYellow);
            let formatted = format!("[{}][{}]: {}", timestamp, level.to_uppercase(), message);
            self.printer.print(&formatted, color);
        }
    }
}
