//! Steplight Domain - Core reporter types
//!
//! This crate defines the run-summary model, the export document shapes and
//! the pure decoding helpers shared by every export engine.
//! All types here are pure Rust with no I/O dependencies.

pub mod body;
pub mod document;
pub mod error;
pub mod header;
pub mod options;
pub mod step;
pub mod summary;
pub mod timestamp;
pub mod xray;

mod nullable;

pub use body::{DecodedBody, PNG_TRUNCATED};
pub use document::{
    ExportDocument, LightCollection, LightDocument, LightExecution, LightResponse, StepsDocument,
    StepsInfo, XrayDocument, XrayInfo, XrayTest,
};
pub use error::{DomainError, DomainResult};
pub use header::{HeaderMap, RawHeader, compact_headers, content_type};
pub use options::{
    DEFAULT_EXPORT_FILE, EXPORT_NAME, ExportPlan, ExporterEngine, ReporterOptions, XrayKeys,
};
pub use step::{NormalizedAssertion, NormalizedRequest, NormalizedResponse, NormalizedStep};
pub use summary::{
    ExecutionOutcome, RawAssertion, RawCollection, RawError, RawExecution, RawRun, RawRunSummary,
    RunStats, RunTimings,
};
pub use timestamp::{format_datetime, format_timestamp};
pub use xray::{ExecutionVerdict, TestKey, TestKeyAggregate, TestStatus};
