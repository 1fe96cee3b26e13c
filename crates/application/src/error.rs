//! Application error types

use steplight_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The reporter options do not fit the selected engine.
    #[error("invalid reporter configuration: {0}")]
    Configuration(DomainError),

    /// The run summary cannot be turned into the requested document.
    #[error("cannot build export document: {0}")]
    Transformation(DomainError),

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        if error.is_configuration() {
            Self::Configuration(error)
        } else {
            Self::Transformation(error)
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
