//! Appender implementations

pub mod console;
pub mod file;

pub use console::ConsoleAppender;
pub use file::{ensure_parent_dir, FileAppender};

pub use crate::core::Appender;
