//! Request and response payloads as recorded in a run summary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A payload in one of the encodings a summary may use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBody {
    /// Node buffer encoding: `{"type": "Buffer", "data": [...]}`.
    Buffer {
        /// Always `"Buffer"`.
        #[serde(rename = "type", default)]
        kind: String,
        /// Raw bytes.
        data: Vec<u8>,
    },
    /// Request body described by its mode.
    Mode(ModeBody),
    /// Plain string.
    Text(String),
}

impl RawBody {
    /// Creates a buffer body from bytes.
    #[must_use]
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::Buffer {
            kind: "Buffer".to_string(),
            data: data.into(),
        }
    }

    /// Returns the payload bytes as they went over the wire.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Buffer { data, .. } => data.clone(),
            Self::Mode(body) => body.render().into_bytes(),
            Self::Text(text) => text.as_bytes().to_vec(),
        }
    }
}

/// Form field in `urlencoded` or `formdata` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormParam {
    /// Field name.
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub key: String,
    /// Field value.
    #[serde(default)]
    pub value: Option<String>,
    /// Disabled fields are not sent.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// Request body described by `mode`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeBody {
    /// `raw`, `urlencoded`, `formdata`, `graphql` or `file`.
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub mode: String,
    /// Content in `raw` mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Fields in `urlencoded` mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urlencoded: Vec<FormParam>,
    /// Fields in `formdata` mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formdata: Vec<FormParam>,
    /// Query and variables in `graphql` mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql: Option<Value>,
}

impl ModeBody {
    fn enabled(params: &[FormParam]) -> impl Iterator<Item = (&str, &str)> {
        params
            .iter()
            .filter(|p| !p.disabled)
            .map(|p| (p.key.as_str(), p.value.as_deref().unwrap_or_default()))
    }

    /// Renders the body as the text that was sent.
    #[must_use]
    pub fn render(&self) -> String {
        match self.mode.as_str() {
            "urlencoded" => {
                let pairs: Vec<(&str, &str)> = Self::enabled(&self.urlencoded).collect();
                serde_urlencoded::to_string(pairs).unwrap_or_default()
            }
            "formdata" => Self::enabled(&self.formdata)
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("\n"),
            "graphql" => self
                .graphql
                .as_ref()
                .map(Value::to_string)
                .unwrap_or_default(),
            _ => self.raw.clone().unwrap_or_default(),
        }
    }
}
