// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the facade.
//!
//! Nothing here is fatal to the host process.  Sink creation failure is the
//! only error surfaced to callers (at [`init`](crate::init) time); write
//! failures are recovered inside the sink by dropping the line and counting
//! it, and lifecycle misuse is reported as [`LogError::NotInitialized`]
//! rather than left undefined.

use std::path::PathBuf;

/// Errors reported by the logging facade.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The log file could not be created or opened.
    #[error("can't create log sink at {path:?}: {source}")]
    SinkCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A line could not be written to the sink.  Recovered internally; the
    /// line is dropped and counted.
    #[error("can't write log line: {0}")]
    Write(#[from] std::io::Error),
    /// A lifecycle call that requires a live logger found none.
    #[error("logger is not initialized")]
    NotInitialized,
}
