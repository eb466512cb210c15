//! Log Sink
//!
//! Appends lines to `access.log` and `error.log` under one directory.
//!
//! Every [`LogSink::append`] call opens the file, writes the whole line,
//! flushes, syncs and closes it again. No handle outlives a call, so file
//! watchers that key on metadata changes see each line as its own event.

use crate::error::SimError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ACCESS_LOG_FILE: &str = "access.log";
pub const ERROR_LOG_FILE: &str = "error.log";

/// Target file of an append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Access,
    Error,
}

pub struct LogSink {
    dir: PathBuf,
    access_path: PathBuf,
    error_path: PathBuf,
    dir_ready: bool,
}

impl LogSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            access_path: dir.join(ACCESS_LOG_FILE),
            error_path: dir.join(ERROR_LOG_FILE),
            dir,
            dir_ready: false,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, kind: LogKind) -> &Path {
        match kind {
            LogKind::Access => &self.access_path,
            LogKind::Error => &self.error_path,
        }
    }

    /// Make sure the log directory exists.
    ///
    /// Returns `true` only for the call that actually created it.
    pub fn prepare(&mut self) -> Result<bool, SimError> {
        if self.dir_ready {
            return Ok(false);
        }

        let created = if self.dir.is_dir() {
            false
        } else {
            fs::create_dir_all(&self.dir).map_err(|source| SimError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;
            info!(dir = %self.dir.display(), "Created log directory");
            true
        };

        self.dir_ready = true;
        Ok(created)
    }

    /// Append `line` plus a newline to the file for `kind`.
    pub fn append(&mut self, kind: LogKind, line: &str) -> Result<(), SimError> {
        self.prepare()?;

        let path = self.path(kind);
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        append_line(path, buf.as_bytes()).map_err(|source| SimError::Append {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(file = %path.display(), bytes = buf.len(), "Appended line");
        Ok(())
    }
}

/// Scoped open/write/flush/sync; the handle drops on every return path.
fn append_line(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_data()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prepare_reports_creation_once() {
        let root = tempdir().unwrap();
        let mut sink = LogSink::new(root.path().join("nested").join("logs"));

        assert!(sink.prepare().unwrap());
        assert!(sink.dir().is_dir());
        assert!(!sink.prepare().unwrap());
    }

    #[test]
    fn test_prepare_existing_dir_is_not_a_creation() {
        let root = tempdir().unwrap();
        let mut sink = LogSink::new(root.path());
        assert!(!sink.prepare().unwrap());
    }

    #[test]
    fn test_append_without_prepare_creates_dir() {
        let root = tempdir().unwrap();
        let mut sink = LogSink::new(root.path().join("logs"));

        sink.append(LogKind::Error, "boom").unwrap();

        let written = fs::read_to_string(root.path().join("logs/error.log")).unwrap();
        assert_eq!(written, "boom\n");
    }

    #[test]
    fn test_appends_preserve_prior_lines() {
        let root = tempdir().unwrap();
        let mut sink = LogSink::new(root.path());

        let mut snapshots = Vec::new();
        for i in 0..5 {
            sink.append(LogKind::Access, &format!("line {i}")).unwrap();
            snapshots.push(fs::read(sink.path(LogKind::Access)).unwrap());
        }

        for pair in snapshots.windows(2) {
            assert!(pair[1].starts_with(&pair[0]));
        }
        let text = fs::read_to_string(sink.path(LogKind::Access)).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().last(), Some("line 4"));
        assert!(!sink.path(LogKind::Error).exists());
    }

    #[test]
    fn test_appends_to_existing_file() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(ACCESS_LOG_FILE), "existing\n").unwrap();

        let mut sink = LogSink::new(root.path());
        sink.append(LogKind::Access, "new").unwrap();

        let text = fs::read_to_string(sink.path(LogKind::Access)).unwrap();
        assert_eq!(text, "existing\nnew\n");
    }

    #[test]
    fn test_dir_blocked_by_file_fails() {
        let root = tempdir().unwrap();
        let blocker = root.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();

        let mut sink = LogSink::new(&blocker);
        let err = sink.prepare().unwrap_err();

        assert!(matches!(err, SimError::CreateDir { .. }));
        assert_eq!(err.path(), blocker.as_path());
    }

    #[test]
    fn test_append_failure_names_file() {
        let root = tempdir().unwrap();
        let mut sink = LogSink::new(root.path());
        // A directory where the access file should be makes the open fail.
        fs::create_dir(root.path().join(ACCESS_LOG_FILE)).unwrap();

        let err = sink.append(LogKind::Access, "x").unwrap_err();
        assert!(matches!(err, SimError::Append { .. }));
        assert!(err.to_string().contains(ACCESS_LOG_FILE));
    }
}
