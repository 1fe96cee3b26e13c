//! Content-type aware body decoding.
//!
//! Request and response payloads arrive as raw bytes. Exports embed them as
//! either parsed JSON or text. Decoding never fails: anything that does not
//! parse degrades to its text form.

use serde::Serialize;
use serde_json::Value;

/// Replacement text for PNG payloads, which are never embedded.
pub const PNG_TRUNCATED: &str = "<<< truncated as image/png content-type >>>";

/// A decoded payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedBody {
    /// Body parsed as JSON.
    Json(Value),
    /// Body kept as text.
    Text(String),
}

impl DecodedBody {
    /// Decodes raw bytes according to an optional content type.
    ///
    /// - `application/json`: parsed as JSON, falling back to the text.
    /// - `image/png`: replaced by [`PNG_TRUNCATED`].
    /// - anything else, or no content type: UTF-8 text (lossy).
    #[must_use]
    pub fn decode(raw: &[u8], content_type: Option<&str>) -> Self {
        let text = String::from_utf8_lossy(raw);
        let content_type = content_type.map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            Some(ct) if ct.contains("application/json") => serde_json::from_str(&text)
                .map_or_else(|_| Self::Text(text.into_owned()), Self::Json),
            Some(ct) if ct.contains("image/png") => Self::Text(PNG_TRUNCATED.to_string()),
            _ => Self::Text(text.into_owned()),
        }
    }

    /// Encodes the body as a JSON value for embedding in a document.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Text(text) => Value::String(text.clone()),
        }
    }
}

impl Default for DecodedBody {
    fn default() -> Self {
        Self::Text(String::new())
    }
}
