//! One performed request/assertion step of a run.

use serde::{Deserialize, Serialize};

use super::body::RawBody;
use super::members::Members;
use super::url::RawUrl;
use crate::header::RawHeader;

/// Error reported by the runner, as a bare message or an error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawError {
    /// Bare message.
    Message(String),
    /// Error object.
    Detailed {
        /// Error class, e.g. `AssertionError`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Human-readable message.
        #[serde(default, deserialize_with = "crate::nullable::deserialize")]
        message: String,
        /// System error code, e.g. `ETIMEDOUT`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },
}

impl RawError {
    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Message(message) | Self::Detailed { message, .. } => message,
        }
    }
}

impl From<&str> for RawError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

/// Collection item an execution belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    /// Item identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name, possibly carrying a bracketed test key.
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub name: String,
}

fn default_method() -> String {
    "GET".to_string()
}

/// The request as it was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRequest {
    /// Target URL.
    #[serde(default)]
    pub url: RawUrl,
    /// HTTP method.
    #[serde(default = "default_method")]
    pub method: String,
    /// Ordered headers; keys may repeat.
    #[serde(default, alias = "headers")]
    pub header: Members<RawHeader>,
    /// Payload, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RawBody>,
}

impl Default for RawRequest {
    fn default() -> Self {
        Self {
            url: RawUrl::default(),
            method: default_method(),
            header: Members::default(),
            body: None,
        }
    }
}

/// The response as it was received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponse {
    /// Status code.
    #[serde(default)]
    pub code: u16,
    /// Status text.
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub status: String,
    /// Ordered headers; keys may repeat.
    #[serde(default, alias = "headers")]
    pub header: Members<RawHeader>,
    /// Payload bytes.
    #[serde(default, alias = "body", skip_serializing_if = "Option::is_none")]
    pub stream: Option<RawBody>,
    /// Reported response time in milliseconds.
    #[serde(default)]
    pub response_time: u64,
}

/// One evaluated assertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAssertion {
    /// Assertion name.
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub assertion: String,
    /// Whether the assertion was skipped.
    #[serde(default)]
    pub skipped: bool,
    /// Present iff the assertion failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RawError>,
}

impl RawAssertion {
    /// Returns true if the assertion failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// One performed step of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExecution {
    /// Execution identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The collection item that was executed.
    #[serde(default)]
    pub item: RawItem,
    /// The request as sent.
    #[serde(default)]
    pub request: RawRequest,
    /// Set when the request failed before any response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_error: Option<RawError>,
    /// The response, if one was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<RawResponse>,
    /// Evaluated assertions in order.
    #[serde(default)]
    pub assertions: Vec<RawAssertion>,
}

/// What happened to the request of an execution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExecutionOutcome<'a> {
    /// The request failed; any recorded response is ignored.
    RequestFailed(&'a RawError),
    /// A response was received.
    Responded(&'a RawResponse),
    /// Neither an error nor a response was recorded.
    NoResponse,
}

impl RawExecution {
    /// Display name of the executed item.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Classifies the execution. A request error takes precedence over a
    /// recorded response.
    #[must_use]
    pub const fn outcome(&self) -> ExecutionOutcome<'_> {
        match (&self.request_error, &self.response) {
            (Some(error), _) => ExecutionOutcome::RequestFailed(error),
            (None, Some(response)) => ExecutionOutcome::Responded(response),
            (None, None) => ExecutionOutcome::NoResponse,
        }
    }

    /// Returns true if the request failed or any assertion failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.request_error.is_some() || self.assertions.iter().any(RawAssertion::failed)
    }
}
