//! Serializable logger configuration
//!
//! Lets applications keep logger settings in their own config files
//! (TOML, JSON, ...) and build a [`Logger`](super::Logger) from them.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub log_to_file: bool,
    pub file_path: Option<PathBuf>,
    pub timestamp_format: TimestampFormat,
    /// Append `file:line` of the calling code to each line
    pub include_call_site: bool,
    /// Color severity prefixes on the console
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_to_file: false,
            file_path: None,
            timestamp_format: TimestampFormat::Standard,
            include_call_site: true,
            colors: false,
        }
    }
}

impl LoggerConfig {
    /// Reject settings that cannot be honored.
    ///
    /// Unlike [`Logger::initialize`](super::Logger::initialize), which quietly
    /// stays console-only when given an empty path, a config that asks for
    /// file logging must name the file.
    pub fn validate(&self) -> Result<()> {
        if self.log_to_file {
            match self.file_path {
                Some(ref path) if !path.as_os_str().is_empty() => {}
                _ => {
                    return Err(LoggerError::config(
                        "LoggerConfig",
                        "log_to_file is set but file_path is empty",
                    ))
                }
            }
        }
        if let TimestampFormat::Custom(ref pattern) = self.timestamp_format {
            if pattern.is_empty() {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    "custom timestamp format is empty",
                ));
            }
        }
        Ok(())
    }
}
