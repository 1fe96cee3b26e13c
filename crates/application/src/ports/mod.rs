//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the reporter core and its host.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod export_registry;
mod file_system;

pub use clock::Clock;
pub use export_registry::{ExportRegistry, ReportExport};
pub use file_system::{FileSystem, FileSystemError};
