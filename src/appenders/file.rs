//! File appender implementation
//!
//! Writes go straight to the file without an intermediate buffer, so every
//! line is on disk (or at least in the OS page cache) once `write_line`
//! returns. Files are created with mode `0o644` and missing parent
//! directories with mode `0o755` on Unix.

use crate::core::{Appender, LogLine, LoggerError, Result};
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

pub struct FileAppender {
    path: PathBuf,
    file: Option<File>,
}

impl FileAppender {
    /// Open `path` for appending, creating it if absent.
    ///
    /// The parent directory must already exist; see [`ensure_parent_dir`].
    pub fn open_append(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::options()
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(&path, e))?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    /// Open `path` for writing, truncating any existing content.
    pub fn create_truncate(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = Self::options()
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(&path, e))?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    fn options() -> OpenOptions {
        let mut options = OpenOptions::new();
        options.create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        options
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Release the file handle. Idempotent; failures are discarded.
    pub fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }
}

/// Create the parent directory of `path` (recursively) if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(parent)
        .map_err(|e| LoggerError::directory_creation(parent, e))
}

impl Appender for FileAppender {
    fn write_line(&mut self, line: &LogLine) -> Result<()> {
        let file = self.file.as_mut().ok_or_else(|| {
            LoggerError::writer(format!("log file '{}' is closed", self.path.display()))
        })?;

        let mut output = line.render();
        output.push('\n');
        file.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        self.close();
    }
}
