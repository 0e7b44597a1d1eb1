//! Timestamp formatting utilities
//!
//! All timestamps use the local clock. The default layout is the classic
//! `date time` pair (`2023/03/08 15:30:45`) written after the level prefix.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// strftime layout used when deriving archive names during rotation.
pub const ROTATION_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Timestamp layout for log lines
///
/// # Examples
///
/// ```
/// use leveled_logger::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::Standard;
/// let stamp = format.format(&Local::now());
/// assert_eq!(stamp.len(), "2023/03/08 15:30:45".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Date and time to the second: `2023/03/08 15:30:45`
    #[default]
    Standard,

    /// Date and time with microseconds: `2023/03/08 15:30:45.123456`
    Microseconds,

    /// Custom strftime format
    ///
    /// ```
    /// use leveled_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%Y-%m-%dT%H:%M:%S%z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Standard => datetime.format("%Y/%m/%d %H:%M:%S").to_string(),
            TimestampFormat::Microseconds => {
                datetime.format("%Y/%m/%d %H:%M:%S%.6f").to_string()
            }
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// The strftime layout this format renders with
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            TimestampFormat::Standard => "%Y/%m/%d %H:%M:%S",
            TimestampFormat::Microseconds => "%Y/%m/%d %H:%M:%S%.6f",
            TimestampFormat::Custom(format_str) => format_str,
        }
    }
}

/// Stamp inserted into archive names, e.g. `20230308-153045`.
#[must_use]
pub fn rotation_stamp(datetime: &DateTime<Local>) -> String {
    datetime.format(ROTATION_STAMP_FORMAT).to_string()
}
