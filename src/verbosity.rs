//! Verbosity configuration and its resolution into a severity threshold.
//!
//! The `--verbose` flag can be absent, present with no value, or present
//! with a level name. That shape is captured once as a [`Verbosity`] and
//! resolved into a single [`Severity`] at logger construction; the raw
//! configuration is never re-inspected afterward.

use crate::severity::Severity;

/// The shape of the `--verbose` configuration option.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// The flag was not passed.
    #[default]
    Absent,
    /// The flag was passed with no value (`-v` / `--verbose`).
    Enabled,
    /// The flag was passed with a value (`--verbose=LEVEL`).
    Named(String),
}

impl Verbosity {
    /// Builds a `Verbosity` from an optional-value flag as clap parses it.
    pub fn from_flag(flag: Option<Option<String>>) -> Self {
        match flag {
            None => Verbosity::Absent,
            Some(None) => Verbosity::Enabled,
            Some(Some(name)) => Verbosity::Named(name),
        }
    }

    /// Resolves this configuration into a severity threshold.
    ///
    /// The bare flag means maximum verbosity. A named level is looked up
    /// case-insensitively; an empty value behaves like the bare flag,
    /// while any unrecognized non-empty value falls back to `Info`.
    /// Resolution never fails.
    pub fn resolve(&self) -> Severity {
        match self {
            Verbosity::Absent => Severity::Info,
            Verbosity::Enabled => Severity::Debug,
            Verbosity::Named(name) => match name.to_lowercase().as_str() {
                "error" => Severity::Error,
                "warn" => Severity::Warn,
                "info" => Severity::Info,
                "debug" => Severity::Debug,
                "" => Severity::Debug,
                _ => Severity::Info,
            },
        }
    }
}
