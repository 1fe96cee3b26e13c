//! Domain error types

use thiserror::Error;

/// Domain-level errors that abort building an export document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A reporter option required by the selected engine is missing.
    #[error("missing required reporter option: {0}")]
    MissingOption(&'static str),

    /// A step name carries no bracketed test key.
    #[error("no test key found in step name: {step:?}")]
    MissingTestKey {
        /// Display name of the offending step.
        step: String,
    },

    /// A test key does not belong to the configured project.
    #[error("test key {key} of step {step:?} does not belong to project {project}")]
    ForeignTestKey {
        /// The extracted key.
        key: String,
        /// Display name of the offending step.
        step: String,
        /// The configured project key.
        project: String,
    },

    /// An epoch timestamp cannot be represented as a calendar date.
    #[error("timestamp out of range: {0}ms")]
    InvalidTimestamp(i64),
}

impl DomainError {
    /// Returns true for configuration errors, raised before any
    /// transformation work starts.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingOption(_))
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
