//! Shared results logger
//!
//! Every benchmark worker reports through one [`TimingLogger`]. A single
//! mutex guards the file handle, so lines from concurrent workers land in
//! the log whole, never interleaved. The handle is opened lazily on the
//! first write and kept open until the logger is dropped.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{AppError, AppResult};

/// Append-only, mutually-exclusive writer for the results log
pub struct TimingLogger {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl TimingLogger {
    /// Create a logger targeting `path`. The file is not opened or created
    /// until the first [`log`](Self::log) call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    /// Path of the results log
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message` plus a line terminator to the results log.
    ///
    /// Opens the file in append mode if this is the first write. The lock
    /// covers the open check and the write, and is released on every path,
    /// including failures.
    pub fn log(&self, message: &str) -> AppResult<()> {
        let mut guard = self
            .file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if guard.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| AppError::LogOpen(format!("{}: {}", self.path.display(), e)))?;
            *guard = Some(file);
        }

        if let Some(file) = guard.as_mut() {
            // One write_all per line keeps the line whole on disk as well.
            let line = format!("{message}\n");
            file.write_all(line.as_bytes())
                .map_err(|e| AppError::LogWrite(format!("{}: {}", self.path.display(), e)))?;
            file.flush()
                .map_err(|e| AppError::LogWrite(format!("{}: {}", self.path.display(), e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_file_is_created_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.txt");

        let logger = TimingLogger::new(&path);
        assert!(!path.exists());

        logger.log("first line").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_concurrent_writes_stay_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.txt");
        let logger = Arc::new(TimingLogger::new(&path));

        let workers: Vec<_> = (0..8)
            .map(|n| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || logger.log(&format!("worker {n}: 1 ms")).unwrap())
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 8);
        for n in 0..8 {
            let expected = format!("worker {n}: 1 ms");
            assert!(lines.contains(&expected.as_str()), "missing line {expected:?}");
        }
    }

    #[test]
    fn test_clones_of_one_logger_share_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.txt");
        let logger = Arc::new(TimingLogger::new(&path));
        let other = Arc::clone(&logger);

        logger.log("from the first handle").unwrap();
        other.log("from the second handle").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "from the first handle\nfrom the second handle\n"
        );
    }

    #[test]
    fn test_reruns_append_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("times.txt");

        let first = TimingLogger::new(&path);
        first.log("run one").unwrap();
        drop(first);

        let second = TimingLogger::new(&path);
        second.log("run two").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "run one\nrun two\n");
    }

    #[test]
    fn test_open_failure_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let logger = TimingLogger::new(dir.path());

        let err = logger.log("never lands").unwrap_err();
        assert_eq!(err.error_code(), "LOG_OPEN_ERROR");
    }
}
