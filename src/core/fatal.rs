//! Fatal-level termination signal
//!
//! Logging at `Fatal` never terminates the process from inside the logger.
//! Instead the call returns a [`FatalExit`] that the caller turns into an
//! exit, either immediately with [`FatalExit::exit`] or by returning it from
//! `main`:
//!
//! ```no_run
//! use leveled_logger::{FatalExit, Logger};
//!
//! fn main() -> Result<(), FatalExit> {
//!     let logger = Logger::new();
//!     if std::env::args().count() > 3 {
//!         return Err(logger.fatal("too many arguments"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! This is not an error condition of the logger; it is the deliberate
//! "log, then stop" behavior of the fatal level.

use std::fmt;
use std::process::{ExitCode, Termination};

/// Exit status used for fatal terminations
pub const FATAL_EXIT_CODE: u8 = 1;

#[must_use = "a fatal log must be turned into a process exit by the caller"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalExit {
    message: String,
}

impl FatalExit {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    /// The (sanitized) message that was logged
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        i32::from(FATAL_EXIT_CODE)
    }

    /// Terminate the process with a non-zero status.
    ///
    /// Destructors of live values do not run, so close file loggers first if
    /// anything beyond already-written lines must be released. Lines already
    /// logged are never lost: writes are unbuffered.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl fmt::Display for FatalExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal: {}", self.message)
    }
}

impl Termination for FatalExit {
    fn report(self) -> ExitCode {
        ExitCode::from(FATAL_EXIT_CODE)
    }
}
