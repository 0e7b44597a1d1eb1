//! Sink management: the console, the optional log file, and rotation

use super::appender::{shared, Output, SharedAppender};
use super::error::{LoggerError, Result};
use super::timestamp::rotation_stamp;
use crate::appenders::file::{ensure_parent_dir, FileAppender};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

struct ActiveFile {
    path: PathBuf,
    appender: Arc<Mutex<FileAppender>>,
}

impl ActiveFile {
    fn new(appender: FileAppender) -> Self {
        Self {
            path: appender.path().to_path_buf(),
            appender: Arc::new(Mutex::new(appender)),
        }
    }

    fn close(&self) {
        self.appender.lock().close();
    }
}

/// Owns the console appender and, when file logging is enabled, the open
/// log file. Invariant: [`SinkManager::output`] contains a file writer iff a
/// file is open.
pub struct SinkManager {
    console: SharedAppender,
    file: Option<ActiveFile>,
}

impl SinkManager {
    pub fn new(console: SharedAppender) -> Self {
        Self {
            console,
            file: None,
        }
    }

    /// Console plus the log file, if one is open
    pub fn output(&self) -> Output {
        let mut targets = vec![Arc::clone(&self.console)];
        if let Some(ref active) = self.file {
            let file: SharedAppender = active.appender.clone();
            targets.push(file);
        }
        Output::new(targets)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(|active| active.path.as_path())
    }

    pub fn is_file_open(&self) -> bool {
        self.file.is_some()
    }

    /// Close any current file, then create the parent directory of `path`
    /// and open it for appending. On failure no file is open.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.close();
        ensure_parent_dir(path)?;
        let appender = FileAppender::open_append(path)?;
        self.file = Some(ActiveFile::new(appender));
        Ok(())
    }

    /// Close the log file if one is open. Idempotent.
    pub fn close(&mut self) {
        if let Some(active) = self.file.take() {
            active.close();
        }
    }

    /// Archive the current file under a timestamped name and start a fresh
    /// one at the original path.
    ///
    /// Returns `Ok(None)` when no file is open. If the rename fails the
    /// original path is reopened for appending so file logging continues;
    /// if that also fails the manager is left console-only.
    pub fn rotate(&mut self) -> Result<Option<PathBuf>> {
        let Some(active) = self.file.take() else {
            return Ok(None);
        };
        active.close();

        let archive = unique_archive_path(&active.path, &Local::now());
        if let Err(e) = fs::rename(&active.path, &archive) {
            let err = LoggerError::file_rename(&active.path, &archive, e);
            match FileAppender::open_append(&active.path) {
                Ok(appender) => self.file = Some(ActiveFile::new(appender)),
                Err(reopen_err) => eprintln!(
                    "[LOGGER ERROR] Failed to reopen log file after rotation failure: {}",
                    reopen_err
                ),
            }
            return Err(err);
        }

        let appender = FileAppender::create_truncate(&active.path)?;
        self.file = Some(ActiveFile::new(appender));
        Ok(Some(archive))
    }

    pub fn flush(&self) -> Result<()> {
        self.output().flush()
    }
}

/// `dir/stem-STAMP.ext` for `dir/stem.ext`; names without an extension get
/// the stamp appended.
pub fn archive_path(original: &Path, stamp: &str) -> PathBuf {
    archive_path_with_suffix(original, stamp, None)
}

fn archive_path_with_suffix(original: &Path, stamp: &str, suffix: Option<usize>) -> PathBuf {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{}-{}", stem, stamp);
    if let Some(n) = suffix {
        name.push_str(&format!("-{}", n));
    }
    if let Some(ext) = original.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    original.with_file_name(name)
}

/// Archive path that does not clobber an earlier archive from the same second.
fn unique_archive_path(original: &Path, now: &DateTime<Local>) -> PathBuf {
    let stamp = rotation_stamp(now);
    let mut candidate = archive_path(original, &stamp);
    let mut n = 1;
    while candidate.exists() {
        candidate = archive_path_with_suffix(original, &stamp, Some(n));
        n += 1;
    }
    candidate
}
