//! Console appender implementation

use crate::core::{Appender, LogLine, Result};
use colored::Colorize;
use std::io::{self, Write};

pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
    use_colors: bool,
}

impl ConsoleAppender {
    /// Console appender writing to stdout without colors
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Console appender writing to an arbitrary target
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_writer(std::io::stderr());
    /// ```
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            use_colors: false,
        }
    }

    /// Color the severity prefix. Only the console is ever colored; file
    /// output stays plain.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn format_line(&self, line: &LogLine) -> String {
        match line.level {
            Some(level) if self.use_colors => format!(
                "{} {}\n",
                line.prefix.color(level.color_code()),
                line.text
            ),
            _ => format!("{}\n", line.render()),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn write_line(&mut self, line: &LogLine) -> Result<()> {
        let output = self.format_line(line);
        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
