//! Log entry structure

use super::call_site::CallSite;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub call_site: Option<CallSite>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so that a single call always produces a single line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: impl AsRef<str>) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message.as_ref()),
            timestamp: Local::now(),
            call_site: None,
        }
    }

    pub fn with_call_site(mut self, call_site: Option<CallSite>) -> Self {
        self.call_site = call_site;
        self
    }

    /// Message body as written after the timestamp: `file:line: message`,
    /// or just the message when the call site is unknown.
    pub fn body(&self) -> String {
        match self.call_site {
            Some(site) => format!("{}: {}", site, self.message),
            None => self.message.clone(),
        }
    }
}

/// Arguments rendered with a single space between them, for the
/// unformatted logging variants (`info!(logger; "a", 1, path)`).
pub struct SpaceJoined<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for SpaceJoined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}
