// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity model.
//!
//! Levels are declared in monotonic order of severity, so the sink's
//! minimum-severity filter is an ordinary `>=` comparison on declaration
//! order. Display labels are fixed and never reassigned.

/// Severity of a log record.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Developer diagnostics.  Suppressed unless debug logging is enabled.
    Debug,
    /// Routine chatter.  Below the default filter threshold.
    Normal,
    /// Operational information.  The default filter threshold.
    Info,
    /// Suspicious condition.
    Warning,
    /// Runtime error.
    Error,
    /// The process is unlikely to continue.
    Critical,
}

impl Level {
    /// The fixed display label for this level.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Normal => "normal",
            Level::Info => " info",
            Level::Warning => " warn",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }

    /// Converts a raw discriminant back into a `Level`.
    ///
    /// Returns `None` for values outside the enumerated range.
    pub const fn from_raw(raw: u8) -> Option<Level> {
        match raw {
            0 => Some(Level::Debug),
            1 => Some(Level::Normal),
            2 => Some(Level::Info),
            3 => Some(Level::Warning),
            4 => Some(Level::Error),
            5 => Some(Level::Critical),
            _ => None,
        }
    }

    /// Renders a raw discriminant as its label, or as the raw integer when it
    /// is outside the enumerated range.  Total: no error is possible.
    pub fn label_or_raw(raw: u8) -> String {
        match Level::from_raw(raw) {
            Some(level) => level.label().to_string(),
            None => raw.to_string(),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_monotonic() {
        assert!(Level::Debug < Level::Normal);
        assert!(Level::Normal < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Level::Debug.label(), "debug");
        assert_eq!(Level::Normal.label(), "normal");
        assert_eq!(Level::Info.label(), " info");
        assert_eq!(Level::Warning.label(), " warn");
        assert_eq!(Level::Error.label(), "error");
        assert_eq!(Level::Critical.label(), "critical");
    }

    #[test]
    fn raw_roundtrip() {
        for raw in 0..=5u8 {
            let level = Level::from_raw(raw).unwrap();
            assert_eq!(level as u8, raw);
        }
        assert_eq!(Level::from_raw(6), None);
    }

    #[test]
    fn unknown_raw_renders_as_integer() {
        assert_eq!(Level::label_or_raw(4), "error");
        assert_eq!(Level::label_or_raw(17), "17");
    }
}
