//! Error types for the logger system

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The parent directory of the log file could not be created
    #[error("Failed to create log directory '{}': {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened or created
    #[error("Failed to open log file '{}': {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The active log file could not be renamed to its archive name
    #[error("Failed to rename log file '{}' to '{}': {source}", from.display(), to.display())]
    FileRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    Writer(String),
}

impl LoggerError {
    /// Create a directory creation error
    pub fn directory_creation(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreation {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a file open error
    pub fn file_open(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a file rename error
    pub fn file_rename(
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::FileRename {
            from: from.as_ref().to_path_buf(),
            to: to.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }
}
