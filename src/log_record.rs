// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type.
//!
//! [`LogRecord`] is the unit handed to a [`Logger`](crate::Logger).  It
//! captures timestamp, severity, and the calling thread's identity at
//! construction time, then accumulates message parts until it is submitted.
//! Records are ephemeral: built at the call site, consumed immediately by the
//! sink, never retained.
//!
//! # Message budget
//!
//! The message (tag prefix included) is bounded at [`MAX_MESSAGE_LEN`] bytes.
//! Appending past the budget clips the offending part at a char boundary so
//! that [`TRUNCATION_MARKER`] still fits inside the budget, and ignores every
//! later part.  Truncation is explicit and marked, never silent.

use crate::Level;
use std::fmt::Display;

/// Upper bound, in bytes, on the message portion of a record.
pub const MAX_MESSAGE_LEN: usize = 2048;

/// Appended in place of clipped content when a message exceeds
/// [`MAX_MESSAGE_LEN`].  The marker is budgeted inside the bound, so a
/// truncated message still renders to at most [`MAX_MESSAGE_LEN`] bytes.
pub const TRUNCATION_MARKER: &str = "…[truncated]";

/// A log record.
///
/// The API assumes you progressively write parts into the record rather than
/// concatenating strings up front.  Because records are owned by the calling
/// thread until submission, no synchronization is needed while building one.
///
/// 1.  Create a new [`LogRecord`] (this stamps time and thread identity).
/// 2.  Progressively write to it with [`log`](Self::log) /
///     [`log_owned`](Self::log_owned).
/// 3.  Submit it to a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: Level,
    timestamp: chrono::DateTime<chrono::Local>,
    thread: String,
    parts: Vec<String>,
    message_len: usize,
    truncated: bool,
}

impl LogRecord {
    /// Creates a record of the given severity, stamping the current wall
    /// clock and the calling thread's identity.
    ///
    /// Thread identity is captured here, per call, so a record built on one
    /// thread and submitted from another still reports its origin.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            timestamp: chrono::Local::now(),
            thread: format!("{:?}", std::thread::current().id()),
            parts: Vec::new(),
            message_len: 0,
            truncated: false,
        }
    }

    /// Appends a borrowed message part, copying it.
    pub fn log(&mut self, message: &str) {
        self.push_part(message.to_string());
    }

    /// Appends an owned message part without copying.
    ///
    /// Useful for parts that are constructed in the process of logging.
    pub fn log_owned(&mut self, message: String) {
        self.push_part(message);
    }

    fn push_part(&mut self, mut message: String) {
        if self.truncated {
            return;
        }
        let budget = MAX_MESSAGE_LEN - TRUNCATION_MARKER.len();
        if self.message_len + message.len() > budget {
            let mut keep = budget - self.message_len;
            while !message.is_char_boundary(keep) {
                keep -= 1;
            }
            message.truncate(keep);
            self.message_len += message.len();
            if !message.is_empty() {
                self.parts.push(message);
            }
            self.parts.push(TRUNCATION_MARKER.to_string());
            self.truncated = true;
            return;
        }
        self.message_len += message.len();
        self.parts.push(message);
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The opaque identifier of the thread that created this record.
    pub fn thread(&self) -> &str {
        &self.thread
    }

    /// Whether the message budget was exceeded and content clipped.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// The message portion of the record, without timestamp or severity.
    pub fn message(&self) -> String {
        self.parts.concat()
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

/// Renders the full line, minus the trailing newline:
/// `YYYY-MM-DD, HH:MM:SS.ffffff <severity> <thread-id> message`.
impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} <{}> <{}> ",
            self.timestamp.format("%Y-%m-%d, %H:%M:%S%.6f"),
            self.level,
            self.thread
        )?;
        for part in &self.parts {
            f.write_str(part)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogRecord:

Clone/PartialEq/Eq derived - records are plain data and tests compare them.
Hash is out: chrono's DateTime is not Hash-friendly across offsets and
records are never map keys.  Copy is out (heap parts).  Ord makes no sense.
Default exists mostly so a record can be conjured in doctests.
*/
