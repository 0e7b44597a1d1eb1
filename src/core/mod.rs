//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod channel;
pub mod config;
pub mod error;
pub mod fatal;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use appender::{shared, Appender, LogLine, Output, SharedAppender};
pub use call_site::CallSite;
pub use channel::{Channel, Channels, DEFAULT_PREFIX};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use fatal::{FatalExit, FATAL_EXIT_CODE};
pub use log_entry::{LogEntry, SpaceJoined};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::{archive_path, SinkManager};
pub use timestamp::{rotation_stamp, TimestampFormat, ROTATION_STAMP_FORMAT};
