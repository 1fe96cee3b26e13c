//! Export document shapes.
//!
//! A document is built fresh for every completed run and handed once to the
//! export writer. All shapes serialize to plain JSON.

use serde::Serialize;
use serde_json::Value;

use crate::body::DecodedBody;
use crate::header::RawHeader;
use crate::step::{NormalizedAssertion, NormalizedStep};
use crate::summary::{Members, RawError, RawRequest, RunStats};
use crate::xray::{TestKey, TestStatus};

/// Run metadata of the steps document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsInfo {
    /// Collection name.
    pub name: Option<String>,
    /// Collection description, only when declared as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Environment name.
    pub env: Option<String>,
    /// Run start, epoch milliseconds.
    pub start_date: i64,
    /// Run end, epoch milliseconds.
    pub finish_date: i64,
    /// `finish_date - start_date`.
    pub duration: i64,
    /// Run start rendered as an ISO-8601 timestamp.
    pub started: String,
}

/// Compact per-step export (engine `default`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepsDocument {
    /// Run metadata.
    pub info: StepsInfo,
    /// Normalized steps in execution order.
    pub steps: Vec<NormalizedStep>,
    /// Raw run statistics, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<RunStats>,
}

/// Collection block of the light document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightCollection {
    /// Collection identifier.
    pub id: Option<String>,
    /// Collection name.
    pub name: Option<String>,
    /// Declared events, passed through.
    pub events: Vec<Value>,
    /// Declared variables, passed through.
    pub variables: Vec<Value>,
    /// Number of item definitions.
    pub item_count: usize,
    /// Item definitions, passed through.
    pub items: Vec<Value>,
}

/// Response block of a light execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightResponse {
    /// Headers as received, uncompacted.
    pub headers: Members<RawHeader>,
    /// Status code.
    pub code: u16,
    /// Status text.
    pub status: String,
    /// Decoded payload.
    pub body: DecodedBody,
}

/// One execution of the light document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LightExecution {
    /// Execution identifier.
    pub id: Option<String>,
    /// The request as received.
    pub request: RawRequest,
    /// Request error, if the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_error: Option<RawError>,
    /// The response, absent on request errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<LightResponse>,
    /// Assertion outcomes in order.
    pub assertions: Vec<NormalizedAssertion>,
}

/// Collection-centric export (engine `light`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightDocument {
    /// Collection metadata and definitions.
    pub collection: LightCollection,
    /// Environment name.
    pub environment: Option<String>,
    /// Executions in order.
    pub executions: Vec<LightExecution>,
    /// Raw run statistics, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<RunStats>,
}

/// Header block of the Xray document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XrayInfo {
    /// Project key.
    pub project: String,
    /// Execution summary line.
    pub summary: String,
    /// Execution description.
    pub description: String,
    /// Run start, ISO-8601 with offset.
    pub start_date: String,
    /// Run end, ISO-8601 with offset.
    pub finish_date: String,
    /// Environment the run used, if named.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub test_environments: Vec<String>,
}

/// One test of the Xray document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XrayTest {
    /// Test key.
    pub test_key: TestKey,
    /// Bookkeeping start, ISO-8601 with offset.
    pub start: String,
    /// Bookkeeping finish: start plus accumulated response time.
    pub finish: String,
    /// Newline-joined comment lines.
    pub comment: String,
    /// Final status.
    pub status: TestStatus,
}

/// Test-execution import document (engine `xray-json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XrayDocument {
    /// Target test execution.
    pub test_execution_key: String,
    /// Header block.
    pub info: XrayInfo,
    /// One entry per test key, in first-seen order.
    pub tests: Vec<XrayTest>,
}

/// Any export document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDocument {
    /// Compact per-step document.
    Steps(StepsDocument),
    /// Collection-centric document.
    Light(LightDocument),
    /// Test-execution import document.
    Xray(XrayDocument),
}

impl From<StepsDocument> for ExportDocument {
    fn from(document: StepsDocument) -> Self {
        Self::Steps(document)
    }
}

impl From<LightDocument> for ExportDocument {
    fn from(document: LightDocument) -> Self {
        Self::Light(document)
    }
}

impl From<XrayDocument> for ExportDocument {
    fn from(document: XrayDocument) -> Self {
        Self::Xray(document)
    }
}
