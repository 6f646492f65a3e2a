//! Leveled logger library.
//!
//! This library provides a minimal logger that gates console output by a
//! configured verbosity threshold and forwards accepted messages to an
//! injected sink.

pub mod commands;
pub mod error;
pub mod logger;
pub mod severity;
pub mod sink;
pub mod verbosity;
