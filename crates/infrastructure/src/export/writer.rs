//! Writes registered exports to disk.

use std::path::{Path, PathBuf};

use steplight_application::ports::{FileSystem, ReportExport};

use super::ExportError;
use crate::serialization::to_json_stable_bytes;

/// Persists exports with the stable JSON serializer.
///
/// Exports without a configured path land in `base_dir` under their default
/// file name.
pub struct ExportWriter<F> {
    fs: F,
    base_dir: PathBuf,
}

impl<F: FileSystem> ExportWriter<F> {
    /// Creates a writer resolving default file names against `base_dir`.
    pub fn new(fs: F, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            base_dir: base_dir.into(),
        }
    }

    /// Resolves where an export will be written.
    #[must_use]
    pub fn destination(&self, export: &ReportExport) -> PathBuf {
        export
            .path
            .clone()
            .unwrap_or_else(|| self.base_dir.join(export.default_file_name))
    }

    /// Serializes and writes one export, returning its destination.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn write(&self, export: &ReportExport) -> Result<PathBuf, ExportError> {
        let path = self.destination(export);
        let bytes = to_json_stable_bytes(&export.content)?;
        self.write_bytes(&path, &bytes).await?;
        tracing::info!(name = export.name, path = %path.display(), bytes = bytes.len(), "export written");
        Ok(path)
    }

    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
        self.fs
            .write_file(path, bytes)
            .await
            .map_err(|source| ExportError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
