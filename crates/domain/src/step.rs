//! Normalized view of one execution.

use serde::Serialize;

use crate::body::DecodedBody;
use crate::header::HeaderMap;

/// Request as it appears in an export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRequest {
    /// Canonical URL.
    pub url: String,
    /// HTTP method.
    pub method: String,
    /// Compacted headers.
    pub headers: HeaderMap,
    /// Decoded payload, if one was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<DecodedBody>,
    /// Message of the request error, if the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response as it appears in an export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResponse {
    /// Decoded payload.
    pub body: DecodedBody,
    /// Reported response time in milliseconds.
    pub duration: u64,
    /// Compacted headers.
    pub headers: HeaderMap,
    /// Status code.
    pub code: u16,
    /// Status text.
    pub status: String,
}

/// Assertion outcome as it appears in an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAssertion {
    /// Assertion name.
    pub name: String,
    /// Whether the assertion was skipped.
    pub skipped: bool,
    /// Whether the assertion failed.
    pub failed: bool,
    /// Failure message, only for failed assertions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One execution in export form.
///
/// `response` is present only when the request did not fail and a response
/// was recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStep {
    /// Display name of the executed item.
    pub name: String,
    /// The request.
    pub request: NormalizedRequest,
    /// The response, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<NormalizedResponse>,
    /// Assertion outcomes in order.
    pub assertions: Vec<NormalizedAssertion>,
}

impl NormalizedStep {
    /// Returns true if the request failed or any assertion failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.request.error.is_some() || self.assertions.iter().any(|a| a.failed)
    }
}
