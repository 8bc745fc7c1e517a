// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory sink.
//!
//! [`InMemoryLogger`] captures rendered lines in memory instead of writing
//! them anywhere, which makes it the tool of choice for unit tests that need
//! to assert on log output, and for environments where the file system is
//! unavailable.
//!
//! ```rust
//! use sevlog::InMemoryLogger;
//! use std::sync::Arc;
//!
//! let logger = Arc::new(InMemoryLogger::new());
//! sevlog::install_logger(logger.clone());
//! sevlog::start();
//!
//! sevlog::log_info!("setup", "captured {n}", n = 1);
//!
//! let logs = logger.drain_logs();
//! assert!(logs.contains("setup: captured 1"));
//! # sevlog::deinit().unwrap();
//! ```

use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::sync::Mutex;

/// A [`Logger`] that stores rendered lines in a `Vec<String>`.
#[derive(Debug, Default)]
pub struct InMemoryLogger {
    logs: Mutex<Vec<String>>,
}

impl InMemoryLogger {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Returns the captured lines, leaving the buffer intact.
    pub fn lines(&self) -> Vec<String> {
        self.logs.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Drains all logs into a single newline-joined string, clearing the
    /// internal buffer.
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs.lock().unwrap_or_else(|e| e.into_inner());
        let result = logs.join("\n");
        logs.clear();
        result
    }
}

impl Logger for InMemoryLogger {
    fn finish_log_record(&self, record: LogRecord) {
        let line = record.to_string();
        self.logs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line);
    }

    fn prepare_to_die(&self) {
        // Nothing buffered beyond the Vec itself.
    }
}
