//! The leveled logger.
//!
//! Owns a severity threshold fixed at construction and forwards accepted
//! messages to an injected [`Sink`]. Every call is a stateless read of the
//! threshold plus a conditional forward; there is no buffering and no
//! failure path.

use std::sync::Arc;

use crate::severity::Severity;
use crate::sink::Sink;
use crate::verbosity::Verbosity;

// Literal tags prepended by the level helpers. Info carries no tag.
const ERROR_PREFIX: &str = "[ERROR] ";
const WARN_PREFIX: &str = "[WARN] ";
const DEBUG_PREFIX: &str = "[DEBUG] ";

/// A logger that gates messages by severity against a fixed threshold.
///
/// The sink's lifecycle is owned externally; the logger holds a shared
/// handle and can be called from concurrent call sites without further
/// synchronization, provided the sink itself tolerates that.
pub struct LeveledLogger {
    threshold: Severity,
    sink: Arc<dyn Sink>,
}

impl LeveledLogger {
    /// Creates a logger whose threshold is resolved from `verbosity`.
    pub fn new(verbosity: &Verbosity, sink: Arc<dyn Sink>) -> Self {
        Self {
            threshold: verbosity.resolve(),
            sink,
        }
    }

    /// Creates a logger with an explicit threshold.
    pub fn with_threshold(threshold: Severity, sink: Arc<dyn Sink>) -> Self {
        Self { threshold, sink }
    }

    /// Returns the configured threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Forwards `message` verbatim to the sink iff `severity` ranks at or
    /// below the threshold; otherwise does nothing.
    pub fn log(&self, message: &str, severity: Severity) {
        if severity <= self.threshold {
            self.sink.write(message);
        }
    }

    /// Logs an error message with the `[ERROR] ` prefix.
    pub fn error(&self, message: &str) {
        self.log(&format!("{ERROR_PREFIX}{message}"), Severity::Error);
    }

    /// Logs a warning message with the `[WARN] ` prefix.
    pub fn warn(&self, message: &str) {
        self.log(&format!("{WARN_PREFIX}{message}"), Severity::Warn);
    }

    /// Logs an info message. No prefix; info is the unmarked default voice.
    pub fn info(&self, message: &str) {
        self.log(message, Severity::Info);
    }

    /// Logs a debug message with the `[DEBUG] ` prefix.
    pub fn debug(&self, message: &str) {
        self.log(&format!("{DEBUG_PREFIX}{message}"), Severity::Debug);
    }
}
