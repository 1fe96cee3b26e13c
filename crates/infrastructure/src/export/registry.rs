//! In-memory export registry.

use steplight_application::ports::{ExportRegistry, ReportExport};

/// Exports registered during a run, waiting to be written.
#[derive(Debug, Default)]
pub struct PendingExports {
    exports: Vec<ReportExport>,
}

impl PendingExports {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exports: Vec::new(),
        }
    }

    /// Takes every pending export, leaving the registry empty.
    pub fn drain(&mut self) -> Vec<ReportExport> {
        std::mem::take(&mut self.exports)
    }
}

impl ExportRegistry for PendingExports {
    fn register(&mut self, export: ReportExport) {
        tracing::debug!(name = export.name, path = ?export.path, "export registered");
        self.exports.push(export);
    }
}
