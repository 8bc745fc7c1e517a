// SPDX-License-Identifier: MIT OR Apache-2.0

//! Implementation functions behind the logging macros.
//!
//! Each `log_X!` call expands to three phases:
//! 1. a `*_pre` function builds a [`LogRecord`] with the severity, stamps
//!    time and thread identity, and prepends the tag prefix;
//! 2. the macro drives a [`Formatter`] to write the compile-time-checked
//!    message parts;
//! 3. a `*_post` function submits the record to the process-wide sink.
//!
//! These functions are exported through [`crate::hidden`] for the macros'
//! use and are not intended to be called directly.

use crate::Level;
use crate::global_logger;
use crate::log_record::LogRecord;

/// Writes literal text and formatted values into a log record.
///
/// The macros generate alternating [`write_literal`](Self::write_literal) and
/// [`write_val`](Self::write_val) calls for the static and interpolated parts
/// of the format string.
pub struct Formatter<'a> {
    record: &'a mut LogRecord,
}

impl<'a> Formatter<'a> {
    #[inline]
    pub fn new(record: &'a mut LogRecord) -> Self {
        Self { record }
    }

    /// Writes a static portion of the format string.
    #[inline]
    pub fn write_literal(&mut self, s: &str) {
        self.record.log(s);
    }

    /// Writes an interpolated value.
    ///
    /// `Display` is the type-safe seam here: anything the caller can print,
    /// the log can carry.
    #[inline]
    pub fn write_val<Val: std::fmt::Display>(&mut self, val: Val) {
        self.record.log_owned(val.to_string());
    }
}

fn tagged_record(level: Level, tag: &str) -> LogRecord {
    let mut record = LogRecord::new(level);
    record.log_owned(format!("{tag}: "));
    record
}

pub fn error_pre(tag: impl AsRef<str>) -> LogRecord {
    tagged_record(Level::Error, tag.as_ref())
}

pub fn error_post(record: LogRecord) {
    global_logger::submit(record);
}

pub fn info_pre(tag: impl AsRef<str>) -> LogRecord {
    tagged_record(Level::Info, tag.as_ref())
}

pub fn info_post(record: LogRecord) {
    global_logger::submit(record);
}

pub fn warning_pre(tag: impl AsRef<str>) -> LogRecord {
    tagged_record(Level::Warning, tag.as_ref())
}

pub fn warning_post(record: LogRecord) {
    global_logger::submit(record);
}

/// Unlike the other severities, an empty tag means no prefix at all.
pub fn debug_pre(tag: impl AsRef<str>) -> LogRecord {
    let tag = tag.as_ref();
    if tag.is_empty() {
        LogRecord::new(Level::Debug)
    } else {
        tagged_record(Level::Debug, tag)
    }
}

pub fn debug_post(record: LogRecord) {
    global_logger::submit(record);
}
