//! Logging macros.
//!
//! Every level has two forms:
//!
//! - formatted: `info!(logger, "listening on port {}", port)`, with the
//!   usual `format!` template syntax;
//! - unformatted: `info!(logger; "listening on port", port)`, which writes
//!   the arguments separated by single spaces.
//!
//! The macros record the file and line where they are written, so the
//! location in each log line always points at the calling code.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, warn};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger; "retry", 3, "of", 5);
//! ```

/// Call site of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), line!())
    };
}

/// Log a message at the given level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Warn; "joined", "with", "spaces");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr; $($arg:expr),+ $(,)?) => {
        $logger.log_at(
            $level,
            Some($crate::call_site!()),
            $crate::SpaceJoined(&[$(&$arg as &dyn ::std::fmt::Display),+]),
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, Some($crate::call_site!()), format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// debug!(logger; "Counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug; $($arg),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info; $($arg),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn; $($arg),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error; $($arg),+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message and evaluate to the [`FatalExit`](crate::FatalExit)
/// signal, which the caller must act on.
///
/// ```no_run
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full").exit();
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $logger.fatal_at(
            Some($crate::call_site!()),
            $crate::SpaceJoined(&[$(&$arg as &dyn ::std::fmt::Display),+]),
        )
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_at(Some($crate::call_site!()), format_args!($($arg)+))
    };
}

/// Write through the unleveled `[LOG]` channel.
#[macro_export]
macro_rules! log_print {
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $logger.print_at(
            Some($crate::call_site!()),
            $crate::SpaceJoined(&[$(&$arg as &dyn ::std::fmt::Display),+]),
        )
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.print_at(Some($crate::call_site!()), format_args!($($arg)+))
    };
}
