//! Severity levels for the leveled logger.
//!
//! Levels are ranked least-to-most verbose; the numeric rank is what the
//! logger compares against its configured threshold.

use std::fmt;

/// A message severity, ranked least-to-most verbose.
///
/// The discriminants are the ranks: `Error (1) < Warn (2) < Info (3) <
/// Debug (4)`. A message is emitted when its severity is `<=` the
/// configured threshold, so the derived ordering is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Only error messages.
    Error = 1,
    /// Warnings and error messages.
    Warn = 2,
    /// Info, warnings and error messages.
    Info = 3,
    /// Everything.
    Debug = 4,
}

impl Severity {
    /// All severities, in rank order.
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    /// Returns the numeric rank of this severity.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// Looks up a severity by name, case-insensitively.
    ///
    /// This is the strict lookup used for message tags. Configuration
    /// resolution has its own fallback rules, see
    /// [`Verbosity::resolve`](crate::verbosity::Verbosity::resolve).
    pub fn from_name(name: &str) -> Option<Severity> {
        match name.to_lowercase().as_str() {
            "error" => Some(Severity::Error),
            "warn" => Some(Severity::Warn),
            "info" => Some(Severity::Info),
            "debug" => Some(Severity::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
