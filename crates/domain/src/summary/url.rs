//! Request URL as recorded in a run summary.

use serde::{Deserialize, Serialize};

/// URL can be either a plain string or a structured object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawUrl {
    /// Already rendered URL.
    Text(String),
    /// Structured URL with host and path segments.
    Structured(StructuredUrl),
}

impl Default for RawUrl {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawUrl {
    /// Renders the URL as a canonical string.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Structured(url) => url.render(),
        }
    }
}

/// Host or path given either as segments or pre-joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segments {
    /// Pre-joined string.
    Joined(String),
    /// Individual segments.
    Parts(Vec<String>),
}

impl Segments {
    fn join(&self, separator: &str) -> String {
        match self {
            Self::Joined(text) => text.clone(),
            Self::Parts(parts) => parts.join(separator),
        }
    }
}

/// Query parameter entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// Parameter name.
    #[serde(default)]
    pub key: Option<String>,
    /// Parameter value.
    #[serde(default)]
    pub value: Option<String>,
    /// Disabled parameters are not sent.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// Structured URL object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredUrl {
    /// Raw form, used when the structure is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Scheme without `://`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Host segments, joined with `.`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Segments>,
    /// Port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Path segments, joined with `/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Segments>,
    /// Query parameters in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<QueryParam>,
    /// Fragment without `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl StructuredUrl {
    /// Renders `protocol://host:port/path?query#hash`.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(host) = &self.host else {
            return self.raw.clone().unwrap_or_default();
        };

        let mut url = String::new();
        if let Some(protocol) = &self.protocol {
            url.push_str(protocol);
            url.push_str("://");
        }
        url.push_str(&host.join("."));
        if let Some(port) = &self.port {
            url.push(':');
            url.push_str(port);
        }
        if let Some(path) = &self.path {
            let path = path.join("/");
            if !path.starts_with('/') {
                url.push('/');
            }
            url.push_str(&path);
        }

        let query: Vec<String> = self
            .query
            .iter()
            .filter(|p| !p.disabled)
            .filter_map(|p| {
                let key = p.key.as_deref()?;
                Some(match &p.value {
                    Some(value) => format!("{key}={value}"),
                    None => key.to_string(),
                })
            })
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        if let Some(hash) = &self.hash {
            url.push('#');
            url.push_str(hash);
        }
        url
    }
}
