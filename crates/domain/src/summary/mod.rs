//! Run summary model.
//!
//! These types mirror the summary a collection runner hands over once a run
//! completes. Every field outside the run timings is optional and tolerates
//! both the JSON reporter encoding and the in-process encoding.

mod body;
mod execution;
mod members;
mod url;

pub use body::{FormParam, ModeBody, RawBody};
pub use execution::{
    ExecutionOutcome, RawAssertion, RawError, RawExecution, RawItem, RawRequest, RawResponse,
};
pub use members::Members;
pub use url::{QueryParam, RawUrl, Segments, StructuredUrl};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Complete result record of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRunSummary {
    /// The executed collection.
    #[serde(default)]
    pub collection: RawCollection,
    /// The environment the run used.
    #[serde(default)]
    pub environment: RawEnvironment,
    /// Run results.
    #[serde(default)]
    pub run: RawRun,
}

/// Collection description, either bare text or typed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDescription {
    /// Bare text, implicitly `text/plain`.
    Text(String),
    /// Content with a declared type.
    Typed {
        /// Description body.
        #[serde(default, deserialize_with = "crate::nullable::deserialize")]
        content: String,
        /// Declared type; `text/plain` when absent.
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
}

impl RawDescription {
    /// Returns the description text only when its type is plain text.
    #[must_use]
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Typed { content, kind } => match kind.as_deref() {
                None | Some("text/plain") => Some(content),
                Some(_) => None,
            },
        }
    }
}

/// Collection metadata block of the JSON reporter encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Collection identifier.
    #[serde(rename = "_postman_id", default, skip_serializing_if = "Option::is_none")]
    pub postman_id: Option<String>,
    /// Collection name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Collection description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<RawDescription>,
}

/// The executed collection. Variables, events and item definitions are kept
/// opaque; they are only ever passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCollection {
    /// Metadata block, when the summary uses the reporter encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<CollectionInfo>,
    /// Collection identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Collection name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Collection description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<RawDescription>,
    /// Declared variables.
    #[serde(default, alias = "variables")]
    pub variable: Members<Value>,
    /// Declared events.
    #[serde(default, alias = "events")]
    pub event: Members<Value>,
    /// Item definitions in order.
    #[serde(default, alias = "items")]
    pub item: Members<Value>,
}

impl RawCollection {
    /// Collection identifier from either encoding.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or_else(|| self.info.as_ref()?.postman_id.as_deref())
    }

    /// Collection name from either encoding.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.info.as_ref()?.name.as_deref())
    }

    /// Collection description from either encoding.
    #[must_use]
    pub fn description(&self) -> Option<&RawDescription> {
        self.description
            .as_ref()
            .or_else(|| self.info.as_ref()?.description.as_ref())
    }
}

/// The environment a run used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEnvironment {
    /// Environment name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Start and end of a run, in epoch milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTimings {
    /// Run start.
    #[serde(default)]
    pub started: i64,
    /// Run end.
    #[serde(default)]
    pub completed: i64,
}

impl RunTimings {
    /// Run duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> i64 {
        self.completed.saturating_sub(self.started)
    }
}

/// Totals for one stats category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCounter {
    /// Total count.
    #[serde(default)]
    pub total: u64,
    /// Pending count.
    #[serde(default)]
    pub pending: u64,
    /// Failed count.
    #[serde(default)]
    pub failed: u64,
}

/// Run statistics keyed by category (`requests`, `assertions`, ...).
pub type RunStats = BTreeMap<String, StatCounter>;

/// Run results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRun {
    /// Aggregate counters.
    #[serde(default)]
    pub stats: RunStats,
    /// Start and end times.
    #[serde(default)]
    pub timings: RunTimings,
    /// Performed steps in order.
    #[serde(default)]
    pub executions: Vec<RawExecution>,
    /// Run-level failure, if the run itself broke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RawError>,
}
