//! Steplight Application - Report builders, use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the reporter host)
//! - Export document builders for every engine
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod report;
pub mod use_cases;

#[cfg(test)]
#[allow(clippy::unwrap_used, missing_docs)]
mod test_support;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, ExportRegistry, FileSystem, FileSystemError, ReportExport};
pub use report::{LightExporter, StepNormalizer, StepsExporter, XrayExporter};
pub use use_cases::{ExportReport, ExportReportOutput};
