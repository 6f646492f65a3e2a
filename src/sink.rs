//! Output sinks.
//!
//! A [`Sink`] is the external destination a message is forwarded to once
//! the severity check passes. The logger has no knowledge of how a sink
//! renders, colors, timestamps, or persists the string; any host
//! integration is an adapter implementing this trait.

use std::sync::Mutex;

/// A destination for fully formatted log messages.
///
/// Implementations must be safe for concurrent invocation; the logger is
/// shared freely across call sites.
pub trait Sink: Send + Sync {
    /// Writes a single formatted message to the destination.
    fn write(&self, message: &str);
}

/// A sink that writes each message as one line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write(&self, message: &str) {
        println!("{message}");
    }
}

/// A sink that records messages in memory.
///
/// Used by tests and embedding hosts to observe exactly what the logger
/// forwarded, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded messages, in forwarding order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("memory sink poisoned").clone()
    }

    /// Returns the number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.lock().expect("memory sink poisoned").len()
    }

    /// Returns `true` if no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write(&self, message: &str) {
        self.messages
            .lock()
            .expect("memory sink poisoned")
            .push(message.to_string());
    }
}
