//! Reads run summaries and reporter options from disk.

use std::path::Path;

use steplight_application::ports::{FileSystem, FileSystemError};
use steplight_domain::{RawRunSummary, ReporterOptions};

use crate::serialization::{SerializationError, from_json_bytes, from_yaml_bytes};

/// Error type for reading reporter inputs.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be read.
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    /// The file content is malformed.
    #[error("{path}: {source}")]
    Malformed {
        /// File that failed to parse.
        path: String,
        /// Underlying error.
        source: SerializationError,
    },
}

/// Loads reporter inputs through a [`FileSystem`].
pub struct InputReader<F> {
    fs: F,
}

impl<F: FileSystem> InputReader<F> {
    /// Creates a new reader.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Reads a run summary in the JSON reporter encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a run summary.
    pub async fn read_summary(&self, path: &Path) -> Result<RawRunSummary, InputError> {
        let bytes = self.fs.read_file(path).await?;
        let summary: RawRunSummary =
            from_json_bytes(&bytes).map_err(|source| Self::malformed(path, source))?;
        tracing::debug!(
            path = %path.display(),
            executions = summary.run.executions.len(),
            "run summary loaded"
        );
        Ok(summary)
    }

    /// Reads reporter options from a YAML or JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub async fn read_options(&self, path: &Path) -> Result<ReporterOptions, InputError> {
        let bytes = self.fs.read_file(path).await?;
        from_yaml_bytes(&bytes).map_err(|source| Self::malformed(path, source))
    }

    fn malformed(path: &Path, source: SerializationError) -> InputError {
        InputError::Malformed {
            path: path.display().to_string(),
            source,
        }
    }
}
