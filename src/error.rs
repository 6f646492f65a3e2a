//! Error types for the leveled-logger application.
//!
//! This module provides a unified error type [`Error`] and a convenient
//! [`Result`] type alias. The logger itself never fails; the only fallible
//! operations live in the CLI layer.

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    ///
    /// This variant wraps [`std::io::Error`] and is automatically
    /// converted via the `#[from]` attribute. Raised when reading input
    /// lines in the `filter` command.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
