//! Main logger implementation
//!
//! A [`Logger`] filters calls by severity and writes the survivors through
//! per-level channels to the console and, optionally, a log file. It is an
//! explicit handle: create as many independent loggers as needed and share
//! one between threads through an `Arc`.

use super::{
    appender::{shared, SharedAppender},
    call_site::CallSite,
    channel::Channels,
    config::LoggerConfig,
    error::Result,
    fatal::FatalExit,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::SinkManager,
    timestamp::TimestampFormat,
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::fmt::Display;
use std::path::{Path, PathBuf};

struct State {
    sinks: SinkManager,
    channels: Channels,
}

impl State {
    /// Re-point every channel at the sink manager's current output.
    fn refresh_channels(&mut self) {
        let output = self.sinks.output();
        self.channels.repoint(&output);
    }
}

pub struct Logger {
    min_level: RwLock<LogLevel>,
    state: Mutex<State>,
    include_call_site: bool,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Console-only logger at `Info` level writing to stdout
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(ConsoleAppender::new(), TimestampFormat::default(), true)
    }

    fn with_console(
        console: ConsoleAppender,
        timestamp_format: TimestampFormat,
        include_call_site: bool,
    ) -> Self {
        let console: SharedAppender = shared(console);
        let sinks = SinkManager::new(console);
        let channels = Channels::new(sinks.output(), timestamp_format);

        Self {
            min_level: RwLock::new(LogLevel::Info),
            state: Mutex::new(State { sinks, channels }),
            include_call_site,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from a validated [`LoggerConfig`]
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        let mut builder = Logger::builder()
            .min_level(config.level)
            .timestamp_format(config.timestamp_format.clone())
            .call_site(config.include_call_site)
            .colors(config.colors);
        if config.log_to_file {
            if let Some(ref path) = config.file_path {
                builder = builder.log_file(path);
            }
        }
        builder.build()
    }

    /// Set the threshold and (re)configure file output.
    ///
    /// Any previously open file is closed first. With `log_to_file` and a
    /// non-empty `file_path`, the parent directory is created if missing and
    /// the file is opened for appending. On failure the error names the step
    /// that failed and the logger stays console-only; the new level still
    /// applies.
    pub fn initialize(
        &self,
        level: LogLevel,
        log_to_file: bool,
        file_path: impl AsRef<Path>,
    ) -> Result<()> {
        self.set_min_level(level);

        let file_path = file_path.as_ref();
        let mut state = self.state.lock();
        let result = if log_to_file && !file_path.as_os_str().is_empty() {
            state.sinks.open(file_path)
        } else {
            state.sinks.close();
            Ok(())
        };
        state.refresh_channels();
        result
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Whether a call at `level` would be written
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_for(self.min_level())
    }

    /// Log with an explicit call site. This is what the logging macros
    /// expand to; `None` writes the line without `file:line`.
    pub fn log_at(&self, level: LogLevel, call_site: Option<CallSite>, message: impl Display) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = self.entry(level, call_site, message);
        let state = self.state.lock();
        let failures = state.channels.for_level(level).emit(&entry);
        self.record_write(failures);
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Display) {
        self.log_at(level, Some(CallSite::caller()), message);
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl Display) {
        self.log_at(LogLevel::Debug, Some(CallSite::caller()), message);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl Display) {
        self.log_at(LogLevel::Info, Some(CallSite::caller()), message);
    }

    #[track_caller]
    #[inline]
    pub fn warn(&self, message: impl Display) {
        self.log_at(LogLevel::Warn, Some(CallSite::caller()), message);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl Display) {
        self.log_at(LogLevel::Error, Some(CallSite::caller()), message);
    }

    /// Log at `Fatal` and hand back the termination signal.
    ///
    /// `Fatal` is the highest level, so the line is always written.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> FatalExit {
        self.fatal_at(Some(CallSite::caller()), message)
    }

    pub fn fatal_at(&self, call_site: Option<CallSite>, message: impl Display) -> FatalExit {
        let entry = self.entry(LogLevel::Fatal, call_site, message);
        let state = self.state.lock();
        let failures = state.channels.for_level(LogLevel::Fatal).emit(&entry);
        self.record_write(failures);
        FatalExit::new(entry.message)
    }

    /// Write through the unleveled `[LOG]` channel, bypassing the threshold
    #[track_caller]
    pub fn print(&self, message: impl Display) {
        self.print_at(Some(CallSite::caller()), message);
    }

    pub fn print_at(&self, call_site: Option<CallSite>, message: impl Display) {
        // The default channel has no level of its own
        let entry = self.entry(LogLevel::Info, call_site, message);
        let state = self.state.lock();
        let failures = state.channels.default_channel().emit(&entry);
        self.record_write(failures);
    }

    fn entry(&self, level: LogLevel, call_site: Option<CallSite>, message: impl Display) -> LogEntry {
        let call_site = if self.include_call_site { call_site } else { None };
        LogEntry::new(level, message.to_string()).with_call_site(call_site)
    }

    fn record_write(&self, failures: usize) {
        if failures == 0 {
            self.metrics.record_logged();
        } else {
            self.metrics.record_write_failure();
        }
    }

    /// Archive the current log file and continue in a fresh one.
    ///
    /// Returns the archive path, or `None` when no file is open (console
    /// output continues unchanged). After a successful rotation an `Info`
    /// line naming the archive is logged, attributed to the caller.
    #[track_caller]
    pub fn rotate(&self) -> Result<Option<PathBuf>> {
        let call_site = CallSite::caller();
        let archive = {
            let mut state = self.state.lock();
            let result = state.sinks.rotate();
            state.refresh_channels();
            result?
        };

        if let Some(ref archive) = archive {
            self.metrics.record_rotation();
            self.log_at(
                LogLevel::Info,
                Some(call_site),
                format_args!("Log file rotated to {}", archive.display()),
            );
        }
        Ok(archive)
    }

    /// Close the log file, if any, and continue console-only. Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if !state.sinks.is_file_open() {
            return;
        }
        if let Err(e) = state.sinks.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during close: {}", e);
        }
        state.sinks.close();
        state.refresh_channels();
    }

    pub fn flush(&self) -> Result<()> {
        self.state.lock().sinks.flush()
    }

    /// Path of the active log file
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.state.lock().sinks.file_path().map(Path::to_path_buf)
    }

    pub fn is_file_logging(&self) -> bool {
        self.state.lock().sinks.is_file_open()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use leveled_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .log_file("logs/app.log")
    ///     .build()?;
    /// # Ok::<(), LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    min_level: LogLevel,
    file_path: Option<PathBuf>,
    timestamp_format: TimestampFormat,
    include_call_site: bool,
    colors: bool,
    console: Option<ConsoleAppender>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            file_path: None,
            timestamp_format: TimestampFormat::default(),
            include_call_site: true,
            colors: false,
            console: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Also write to this file (opened for append)
    #[must_use = "builder methods return a new value"]
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Include `file:line` of the calling code (default: on)
    #[must_use = "builder methods return a new value"]
    pub fn call_site(mut self, enabled: bool) -> Self {
        self.include_call_site = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Replace the stdout console appender
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleAppender) -> Self {
        self.console = Some(console);
        self
    }

    /// Build the Logger, opening the log file if one was configured
    pub fn build(self) -> Result<Logger> {
        let console = self
            .console
            .unwrap_or_default()
            .with_colors(self.colors);
        let logger = Logger::with_console(console, self.timestamp_format, self.include_call_site);

        match self.file_path {
            Some(path) => logger.initialize(self.min_level, true, path)?,
            None => logger.set_min_level(self.min_level),
        }
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
