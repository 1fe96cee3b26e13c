//! Application use cases (business logic orchestration).

mod export_report;

pub use export_report::*;
