// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide logger state.
//!
//! One sink configuration is active at a time: a backend [`Logger`], a
//! minimum-severity filter, and an enabled flag.  The slot lives behind a
//! [`RwLock`] so the logging hot path takes a shared lock just long enough to
//! clone the `Arc` out, while lifecycle calls (which are assumed to run on a
//! single control thread during startup/shutdown) take the exclusive lock.
//! The per-record checks read atomics and never block on the slot.
//!
//! Records submitted while no sink is installed are dropped and counted in
//! [`dropped_records`]; logging before `init` or after `deinit` is therefore
//! observable but never undefined behavior.

use crate::Level;
use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

static ACTIVE: RwLock<Option<Arc<ActiveState>>> = RwLock::new(None);

/// One-way process-wide debug switch.  Survives re-`init`.
static DEBUG_LOGGING: AtomicBool = AtomicBool::new(false);

/// Records submitted with no sink installed.
static NO_SINK_DROPS: AtomicU64 = AtomicU64::new(0);

/// The active sink configuration.
///
/// Mutated only by the lifecycle calls; read concurrently by every logging
/// call, hence the atomics.
#[derive(Debug)]
pub(crate) struct ActiveState {
    backend: Arc<dyn Logger>,
    min_level: AtomicU8,
    enabled: AtomicBool,
}

impl ActiveState {
    fn new(backend: Arc<dyn Logger>, min_level: Level) -> Self {
        Self {
            backend,
            min_level: AtomicU8::new(min_level as u8),
            enabled: AtomicBool::new(false),
        }
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub(crate) fn set_min_level(&self, level: Level) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    fn passes_filter(&self, level: Level) -> bool {
        level as u8 >= self.min_level.load(Ordering::Relaxed)
    }

    pub(crate) fn backend(&self) -> &Arc<dyn Logger> {
        &self.backend
    }
}

/// Clones the active state out of the slot.
pub(crate) fn active() -> Option<Arc<ActiveState>> {
    ACTIVE
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

/// Swaps the slot, returning the previous occupant so the caller can flush it
/// outside the lock.
pub(crate) fn replace(new: Option<Arc<ActiveState>>) -> Option<Arc<ActiveState>> {
    let mut slot = ACTIVE.write().unwrap_or_else(|e| e.into_inner());
    std::mem::replace(&mut *slot, new)
}

/// The filter a freshly installed sink starts with.
pub(crate) fn default_min_level() -> Level {
    if debug_logging_enabled() {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Installs `backend` as the active sink, superseding any prior one.
///
/// The prior sink, if any, is disabled and flushed.  The new configuration
/// starts disabled (call [`start`](crate::start)) with the default filter.
pub(crate) fn install_backend(backend: Arc<dyn Logger>) {
    let state = Arc::new(ActiveState::new(backend, default_min_level()));
    if let Some(old) = replace(Some(state)) {
        old.set_enabled(false);
        old.backend.prepare_to_die();
    }
}

/// Replaces the active sink with an arbitrary [`Logger`].
///
/// This is the seam tests use to capture output with an
/// [`InMemoryLogger`](crate::InMemoryLogger); production callers normally go
/// through [`init`](crate::init) instead.  Lifecycle semantics are unchanged:
/// the new sink starts disabled with the default filter.
pub fn install_logger(logger: Arc<dyn Logger>) {
    install_backend(logger);
}

/// Routes a finished record to the active sink.
///
/// Dropped (and counted) when no sink is installed; dropped silently when the
/// sink is stopped or the severity fails the filter.
pub(crate) fn submit(record: LogRecord) {
    let Some(state) = active() else {
        NO_SINK_DROPS.fetch_add(1, Ordering::Relaxed);
        return;
    };
    if !state.enabled() {
        return;
    }
    if !state.passes_filter(record.level()) {
        return;
    }
    state.backend.finish_log_record(record);
}

/// Number of records submitted while no sink was installed.
pub fn dropped_records() -> u64 {
    NO_SINK_DROPS.load(Ordering::Relaxed)
}

/// Whether debug logging has been enabled for this process.
pub fn debug_logging_enabled() -> bool {
    DEBUG_LOGGING.load(Ordering::Relaxed)
}

pub(crate) fn set_debug_logging() {
    DEBUG_LOGGING.store(true, Ordering::Relaxed);
}

/// Serializes tests that touch the process-wide slot.
#[cfg(test)]
pub(crate) static TEST_LOGGER_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());
