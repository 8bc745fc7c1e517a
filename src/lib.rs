//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# sevlog

sevlog is a severity-tagged file logging facade for Rust.

# The problem

Plenty of programs want exactly one log file, a handful of severities, and a
way to switch logging on and off around their own startup and shutdown.
General-purpose logging crates solve a larger problem: pluggable frontends,
level hierarchies per module path, env-var configuration.  When all you need
is "every component calls `log_error!` with its own name and the line ends up
in the file", that machinery is ceremony.

sevlog is the small version of that contract, made explicit:

* one file sink per process, created by [`init`] and torn down by [`deinit`];
* emission toggled by [`start`] and [`stop`];
* four entry points, [`log_error!`], [`log_info!`], [`log_warning!`], and
  [`log_debug!`], each taking a component tag and a format string;
* debug logging off until [`enable_debug`] flips it on for good.

# The API

```rust
# let dir = tempfile::tempdir().unwrap();
# let path = dir.path().join("demo.log");
sevlog::init_path(&path).unwrap();
sevlog::start();

sevlog::log_info!("startup", "listening on port {port}", port = 8080);
sevlog::log_warning!("startup", "config file missing, using defaults");

sevlog::stop();
sevlog::deinit().unwrap();
```

Each line carries a wall-clock timestamp, the severity label, and the
identity of the calling thread:

```text
2026-08-07, 11:03:24.518221 < info> <ThreadId(1)> startup: listening on port 8080
```

The format string is checked at compile time: every `{key}` placeholder must
be matched by a `key = value` argument, and values are rendered through
[`std::fmt::Display`].  There are no varargs to get wrong at runtime.

# Severities and filtering

The sink filters by minimum severity.  The default threshold is
[`Level::Info`]; [`enable_debug`] lowers it to [`Level::Debug`] so debug
records pass.  `log_debug!` call sites are additionally gated on the
process-wide debug flag, so before [`enable_debug`] they cost a single atomic
load and format nothing.

# Failure policy

A logging failure must never crash the caller.  Sink creation failure is
surfaced once, at [`init`] time, as [`LogError`].  Write failures are
recovered inside the sink: the line is dropped and counted
([`FileLogger::dropped_lines`]).  Logging with no sink installed, whether
before [`init`] or after [`deinit`], drops the record and counts it
([`dropped_records`]).

# Multithreading

All four macros are safe to call concurrently without caller-side
synchronization.  Thread identity is captured per call, and the file sink
writes each rendered line whole, so concurrent lines never interleave.
Lifecycle calls are expected to run on a single control thread.
*/

mod error;
mod file_logger;
pub mod global_logger;
mod inmemory_logger;
mod level;
mod lifecycle;
mod log_record;
mod logger;
mod macros;

pub use error::LogError;
pub use file_logger::FileLogger;
pub use global_logger::{debug_logging_enabled, dropped_records, install_logger};
pub use inmemory_logger::InMemoryLogger;
pub use level::Level;
pub use lifecycle::{DEFAULT_LOG_PATH, deinit, enable_debug, init, init_path, start, stop};
pub use log_record::{LogRecord, MAX_MESSAGE_LEN, TRUNCATION_MARKER};
pub use logger::Logger;

pub use sevlog_proc::{lformat, log_debug, log_error, log_info, log_warning};

#[doc(hidden)]
pub mod hidden {
    pub use crate::global_logger::debug_logging_enabled;
    pub use crate::macros::Formatter;
    pub use crate::macros::{
        debug_post, debug_pre, error_post, error_pre, info_post, info_pre, warning_post,
        warning_pre,
    };
}
extern crate self as sevlog;
