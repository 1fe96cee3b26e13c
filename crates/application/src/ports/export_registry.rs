//! Export registration port.

use std::path::PathBuf;

use steplight_domain::ExportDocument;

/// A document ready to be written, as registered with the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportExport {
    /// Reporter name the export is registered under.
    pub name: &'static str,
    /// File name used when `path` is absent.
    pub default_file_name: &'static str,
    /// Configured destination.
    pub path: Option<PathBuf>,
    /// The document.
    pub content: ExportDocument,
}

/// Host mechanism that collects exports for writing.
pub trait ExportRegistry {
    /// Registers one export. Each completed run registers at most once.
    fn register(&mut self, export: ReportExport);
}
