//! Appender trait for log output destinations, and the fan-out writer set

use super::error::Result;
use super::log_level::LogLevel;
use parking_lot::Mutex;
use std::sync::Arc;

/// One rendered log line, split so appenders can style the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// `None` for the unleveled default channel
    pub level: Option<LogLevel>,
    pub prefix: &'static str,
    /// Everything after the prefix: `date time file:line: message`
    pub text: String,
}

impl LogLine {
    /// Plain rendering without trailing newline
    pub fn render(&self) -> String {
        format!("{} {}", self.prefix, self.text)
    }
}

pub trait Appender: Send {
    fn write_line(&mut self, line: &LogLine) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

pub type SharedAppender = Arc<Mutex<dyn Appender>>;

/// Wrap an appender so it can be shared between channels.
pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    Arc::new(Mutex::new(appender))
}

/// Combined set of destinations a line is written to.
///
/// Cloning is cheap; clones write to the same underlying appenders.
#[derive(Clone, Default)]
pub struct Output {
    targets: Vec<SharedAppender>,
}

impl Output {
    pub fn new(targets: Vec<SharedAppender>) -> Self {
        Self { targets }
    }

    /// Write the line to every target and return the number of targets that
    /// failed. A failing target does not stop the others.
    pub fn write(&self, line: &LogLine) -> usize {
        let mut failures = 0;
        for (idx, target) in self.targets.iter().enumerate() {
            let mut target = target.lock();
            if let Err(e) = target.write_line(line) {
                eprintln!(
                    "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                    idx,
                    target.name(),
                    e
                );
                failures += 1;
            }
        }
        failures
    }

    pub fn flush(&self) -> Result<()> {
        for target in &self.targets {
            target.lock().flush()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.targets
            .iter()
            .map(|t| t.lock().name().to_string())
            .collect()
    }
}
