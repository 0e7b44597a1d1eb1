//! Per-level output channels
//!
//! Each severity has its own channel carrying the bracketed prefix and the
//! timestamp layout; a sixth, unleveled channel (`[LOG]`) serves plain
//! `print` calls. All channels point at the same [`Output`] and are
//! re-pointed together whenever the sink set changes.

use super::appender::{LogLine, Output};
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;

/// Prefix of the unleveled default channel
pub const DEFAULT_PREFIX: &str = "[LOG]";

pub struct Channel {
    level: Option<LogLevel>,
    prefix: &'static str,
    timestamp_format: TimestampFormat,
    output: Output,
}

impl Channel {
    fn new(
        level: Option<LogLevel>,
        prefix: &'static str,
        timestamp_format: TimestampFormat,
        output: Output,
    ) -> Self {
        Self {
            level,
            prefix,
            timestamp_format,
            output,
        }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn render(&self, entry: &LogEntry) -> LogLine {
        LogLine {
            level: self.level,
            prefix: self.prefix,
            text: format!(
                "{} {}",
                self.timestamp_format.format(&entry.timestamp),
                entry.body()
            ),
        }
    }

    /// Write the entry; returns the number of destinations that failed.
    pub fn emit(&self, entry: &LogEntry) -> usize {
        self.output.write(&self.render(entry))
    }
}

pub struct Channels {
    leveled: [Channel; 5],
    default: Channel,
}

impl Channels {
    pub fn new(output: Output, timestamp_format: TimestampFormat) -> Self {
        let leveled = LogLevel::ALL.map(|level| {
            Channel::new(
                Some(level),
                level.prefix(),
                timestamp_format.clone(),
                output.clone(),
            )
        });
        let default = Channel::new(None, DEFAULT_PREFIX, timestamp_format, output);
        Self { leveled, default }
    }

    pub fn for_level(&self, level: LogLevel) -> &Channel {
        &self.leveled[level as usize]
    }

    pub fn default_channel(&self) -> &Channel {
        &self.default
    }

    /// Point every channel, including the default one, at `output`.
    pub fn repoint(&mut self, output: &Output) {
        for channel in self.leveled.iter_mut() {
            channel.output = output.clone();
        }
        self.default.output = output.clone();
    }
}
