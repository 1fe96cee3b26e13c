//! Steplight Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod export;
pub mod persistence;
pub mod serialization;

pub use adapters::SystemClock;
pub use export::{ExportError, ExportWriter, PendingExports};
pub use persistence::{InputError, InputReader, TokioFileSystem};
pub use serialization::{
    SerializationError, from_json_bytes, from_yaml_bytes, to_json_stable, to_json_stable_bytes,
};
