//! # Leveled Logger
//!
//! A leveled logging facility: messages are classified by severity, filtered
//! against a threshold, and written to the console and optionally to a log
//! file that can be rotated on demand.
//!
//! Every line has the form
//!
//! ```text
//! [INFO] 2023/03/08 15:30:45 main.rs:12: server started
//! ```
//!
//! ## Features
//!
//! - **Levels**: `Debug < Info < Warn < Error < Fatal`
//! - **Call sites**: the `file:line` of the calling code on every line
//! - **Rotation**: archive the current file as `name-YYYYMMDD-HHMMSS.ext`
//! - **Thread Safe**: one `Logger` can be shared between threads
//!
//! ## Example
//!
//! ```no_run
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, warn};
//!
//! fn main() -> Result<()> {
//!     let logger = Logger::new();
//!     logger.initialize(LogLevel::Debug, true, "logs/demo.log")?;
//!
//!     info!(logger, "listening on port {}", 8080);
//!     warn!(logger; "cache miss ratio", 0.4);
//!
//!     if let Some(archive) = logger.rotate()? {
//!         println!("archived to {}", archive.display());
//!     }
//!     logger.close();
//!     Ok(())
//! }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, CallSite, FatalExit, LogEntry, LogLevel, LogLine, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    Appender, CallSite, FatalExit, LogEntry, LogLevel, LogLine, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Result, SpaceJoined, TimestampFormat,
};
