//! Serialization helpers for summaries, options and export documents.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
/// - Map keys in `BTreeMap` order, struct fields in declaration order
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Serializes a value to deterministic JSON bytes for direct file writing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    Ok(to_json_stable(value)?.into_bytes())
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

/// Deserializes YAML (or JSON, which YAML accepts) from bytes.
///
/// # Errors
///
/// Returns an error if the document is invalid or doesn't match the expected type.
pub fn from_yaml_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use steplight_domain::{ExporterEngine, HeaderMap, RawRunSummary, ReporterOptions};

    #[test]
    fn test_stable_serialization_format() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Zeta".to_string(), "1".to_string());
        headers.insert("Accept".to_string(), "*/*".to_string());

        let json = to_json_stable(&headers).expect("serialization should work");

        assert_eq!(json, "{\n  \"Accept\": \"*/*\",\n  \"X-Zeta\": \"1\"\n}\n");
    }

    #[test]
    fn test_summary_from_json_bytes() {
        let json = br#"{"collection": {"name": "Shop"}, "run": {"timings": {"started": 1, "completed": 3}}}"#;

        let summary: RawRunSummary = from_json_bytes(json).expect("deserialization should work");

        assert_eq!(summary.collection.name(), Some("Shop"));
        assert_eq!(summary.run.timings.duration_ms(), 2);
    }

    #[test]
    fn test_invalid_json() {
        let result: Result<RawRunSummary, _> = from_json_bytes(b"{\"run\": ");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }

    #[test]
    fn test_options_from_yaml() {
        let yaml = b"exporterEngine: xray-json\nxrayProjectKey: PROJ\nxrayTestExecutionKey: PROJ-9\n";

        let options: ReporterOptions = from_yaml_bytes(yaml).expect("deserialization should work");

        assert_eq!(options.exporter_engine, ExporterEngine::XrayJson);
        assert_eq!(options.xray_project_key.as_deref(), Some("PROJ"));
    }

    #[test]
    fn test_options_from_json_through_yaml() {
        let json = br#"{"exportPath": "steps.json", "includeStepStats": true}"#;

        let options: ReporterOptions = from_yaml_bytes(json).expect("deserialization should work");

        assert!(options.include_step_stats);
    }
}
