//! Error types for configuration deltas and the try-layer of the formatters.
//!
//! None of these reach a host caller: the public formatting entry points are
//! infallible and fall back to the unchanged input.

use thiserror::Error;

/// Errors that can occur when applying a settings-change delta.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown setting '{name}'")]
    UnknownSetting { name: String },

    #[error("type mismatch for setting '{setting}': expected {expected}, got {got}")]
    TypeMismatch {
        setting: String,
        expected: &'static str,
        got: &'static str,
    },
}

/// Errors that can occur when parsing a host-rendered date string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("empty date string")]
    Empty,

    #[error("expected 3 comma-separated segments, found {found}")]
    MissingSegments { found: usize },

    #[error("missing '.' between day and month")]
    MalformedDayMonth,
}

/// Errors that can occur when deriving a temperature scale from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("no valid temperature breakpoints configured")]
    NoBreakpoints,

    #[error("no temperature descriptors configured")]
    NoDescriptors,
}
