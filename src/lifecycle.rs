// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle of the process-wide logger.
//!
//! State machine: uninitialized → initialized (disabled) → enabled ⇄ disabled
//! → torn down.  [`init`] configures the file sink, [`start`]/[`stop`] toggle
//! emission, [`deinit`] flushes and releases.  [`enable_debug`] is the
//! one-way switch that makes [`log_debug!`](crate::log_debug) calls emit.
//!
//! The lifecycle calls are meant to run on a single control thread during
//! startup and shutdown; the logging macros themselves may be called from any
//! thread at any point in between.

use crate::Level;
use crate::error::LogError;
use crate::file_logger::FileLogger;
use crate::global_logger;
use std::path::Path;
use std::sync::Arc;

/// Log file used by [`init`] when no path is supplied.
pub const DEFAULT_LOG_PATH: &str = "sevlog.log";

/// Opens the default-named log file and installs it as the process-wide sink.
///
/// Equivalent to `init_path(DEFAULT_LOG_PATH)`.
pub fn init() -> Result<(), LogError> {
    init_path(DEFAULT_LOG_PATH)
}

/// Opens the log file at `path` and installs it as the process-wide sink.
///
/// At most one sink is live at a time: a prior sink is disabled and flushed
/// before the new one takes its place.  The new sink starts disabled (call
/// [`start`] to begin emission) and filters severities below
/// [`Level::Info`] (below [`Level::Debug`] once [`enable_debug`] has been
/// called).
///
/// # Errors
///
/// [`LogError::SinkCreation`] when the file cannot be created or opened.  The
/// prior sink, if any, is left in place in that case.
pub fn init_path(path: impl AsRef<Path>) -> Result<(), LogError> {
    let sink = FileLogger::new(path)?;
    global_logger::install_backend(Arc::new(sink));
    Ok(())
}

/// Enables emission.  No-op when no logger is initialized.
pub fn start() {
    if let Some(state) = global_logger::active() {
        state.set_enabled(true);
    }
}

/// Disables emission.  Records submitted while stopped are dropped at the
/// point of emission.  No-op when no logger is initialized.
pub fn stop() {
    if let Some(state) = global_logger::active() {
        state.set_enabled(false);
    }
}

/// Turns on debug logging for the rest of the process's life.
///
/// Flips the process-wide flag that gates [`log_debug!`](crate::log_debug)
/// call sites, and lowers the live sink's filter to [`Level::Debug`] so the
/// records pass.  There is no corresponding disable; the flag survives
/// re-[`init`].
pub fn enable_debug() {
    global_logger::set_debug_logging();
    if let Some(state) = global_logger::active() {
        state.set_min_level(Level::Debug);
    }
}

/// Flushes and releases the process-wide sink.
///
/// Logging calls made after this (and before another [`init`]) are dropped
/// and counted in [`dropped_records`](crate::dropped_records).
///
/// # Errors
///
/// [`LogError::NotInitialized`] when no logger is live.
pub fn deinit() -> Result<(), LogError> {
    match global_logger::replace(None) {
        Some(state) => {
            state.set_enabled(false);
            state.backend().prepare_to_die();
            Ok(())
        }
        None => Err(LogError::NotInitialized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global_logger::TEST_LOGGER_GUARD;

    #[test]
    fn start_and_stop_without_init_are_noops() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let _ = deinit();
        start();
        stop();
    }

    #[test]
    fn deinit_without_init_reports_not_initialized() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let _ = deinit();
        assert!(matches!(deinit(), Err(LogError::NotInitialized)));
    }

    #[test]
    fn init_failure_leaves_process_usable() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let _ = deinit();

        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = init_path(blocker.join("sink.log")).unwrap_err();
        assert!(matches!(err, LogError::SinkCreation { .. }));

        // No sink was installed; lifecycle calls still behave.
        start();
        assert!(matches!(deinit(), Err(LogError::NotInitialized)));
    }

    #[test]
    fn init_starts_disabled() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        let dir = tempfile::tempdir().unwrap();
        init_path(dir.path().join("disabled.log")).unwrap();

        crate::log_error!("init_starts_disabled", "before start");
        deinit().unwrap();

        let contents = std::fs::read_to_string(dir.path().join("disabled.log")).unwrap();
        assert_eq!(contents, "");
    }
}
