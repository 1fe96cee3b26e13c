//! Export infrastructure.
//!
//! Collects exports registered by the reporter and writes them to disk.

mod registry;
mod writer;

pub use registry::PendingExports;
pub use writer::ExportWriter;

use std::path::PathBuf;

use steplight_application::ports::FileSystemError;
use thiserror::Error;

use crate::serialization::SerializationError;

/// Export error type.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The document could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
    /// The document could not be written.
    #[error("Failed to write export to {path}: {source}")]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying error.
        source: FileSystemError,
    },
}
