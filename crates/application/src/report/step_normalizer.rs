//! Conversion of raw executions into normalized steps.

use steplight_domain::summary::{RawAssertion, RawExecution, RawRequest, RawResponse};
use steplight_domain::{
    DecodedBody, ExecutionOutcome, NormalizedAssertion, NormalizedRequest, NormalizedResponse,
    NormalizedStep, compact_headers, content_type,
};

/// Builds [`NormalizedStep`]s from raw executions.
///
/// Normalization is total: absent headers or assertions become empty
/// collections and undecodable bodies fall back to text.
pub struct StepNormalizer;

impl StepNormalizer {
    /// Normalizes one execution.
    #[must_use]
    pub fn normalize(execution: &RawExecution) -> NormalizedStep {
        let mut request = Self::request(&execution.request);
        let response = match execution.outcome() {
            ExecutionOutcome::RequestFailed(error) => {
                request.error = Some(error.message().to_string());
                None
            }
            ExecutionOutcome::Responded(response) => Some(Self::response(response)),
            ExecutionOutcome::NoResponse => None,
        };

        NormalizedStep {
            name: execution.name().to_string(),
            request,
            response,
            assertions: Self::assertions(&execution.assertions),
        }
    }

    /// Normalizes a request without regard to its outcome.
    #[must_use]
    pub fn request(request: &RawRequest) -> NormalizedRequest {
        let body = request
            .body
            .as_ref()
            .map(|body| DecodedBody::decode(&body.to_bytes(), content_type(&request.header)));

        NormalizedRequest {
            url: request.url.render(),
            method: request.method.clone(),
            headers: compact_headers(&request.header),
            body,
            error: None,
        }
    }

    /// Normalizes a received response.
    #[must_use]
    pub fn response(response: &RawResponse) -> NormalizedResponse {
        NormalizedResponse {
            body: Self::response_body(response),
            duration: response.response_time,
            headers: compact_headers(&response.header),
            code: response.code,
            status: response.status.clone(),
        }
    }

    /// Decodes a response payload using the response's own content type.
    #[must_use]
    pub fn response_body(response: &RawResponse) -> DecodedBody {
        let bytes = response
            .stream
            .as_ref()
            .map(|stream| stream.to_bytes())
            .unwrap_or_default();
        DecodedBody::decode(&bytes, content_type(&response.header))
    }

    /// Normalizes assertion outcomes, keeping their order.
    #[must_use]
    pub fn assertions(assertions: &[RawAssertion]) -> Vec<NormalizedAssertion> {
        assertions
            .iter()
            .map(|assertion| NormalizedAssertion {
                name: assertion.assertion.clone(),
                skipped: assertion.skipped,
                failed: assertion.failed(),
                error_message: assertion.error.as_ref().map(|e| e.message().to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use steplight_domain::summary::{RawBody, RawError, RawItem, RawUrl};
    use steplight_domain::{PNG_TRUNCATED, RawHeader};

    fn execution() -> RawExecution {
        RawExecution {
            id: Some("e1".to_string()),
            item: RawItem {
                id: None,
                name: "Create user".to_string(),
            },
            request: RawRequest {
                url: RawUrl::Text("https://api.example.com/users".to_string()),
                method: "POST".to_string(),
                header: vec![
                    RawHeader::new("Content-Type", "application/json"),
                    RawHeader::new("X-Trace", "1"),
                    RawHeader::new("X-Trace", "2"),
                ]
                .into(),
                body: Some(RawBody::Text(r#"{"name":"Ada"}"#.to_string())),
            },
            request_error: None,
            response: Some(RawResponse {
                code: 201,
                status: "Created".to_string(),
                header: vec![RawHeader::new("Content-Type", "application/json")].into(),
                stream: Some(RawBody::from_bytes(br#"{"id":7}"#.to_vec())),
                response_time: 35,
            }),
            assertions: vec![
                RawAssertion {
                    assertion: "status is 201".to_string(),
                    skipped: false,
                    error: None,
                },
                RawAssertion {
                    assertion: "has location".to_string(),
                    skipped: false,
                    error: Some(RawError::from("expected header location")),
                },
                RawAssertion {
                    assertion: "schema".to_string(),
                    skipped: true,
                    error: None,
                },
            ],
        }
    }

    #[test]
    fn test_normalize_request() {
        let step = StepNormalizer::normalize(&execution());

        assert_eq!(step.name, "Create user");
        assert_eq!(step.request.url, "https://api.example.com/users");
        assert_eq!(step.request.method, "POST");
        assert_eq!(step.request.headers["X-Trace"], "2");
        assert_eq!(step.request.body, Some(DecodedBody::Json(json!({"name": "Ada"}))));
        assert_eq!(step.request.error, None);
    }

    #[test]
    fn test_normalize_response() {
        let step = StepNormalizer::normalize(&execution());
        let response = step.response.expect("response should be present");

        assert_eq!(response.code, 201);
        assert_eq!(response.status, "Created");
        assert_eq!(response.duration, 35);
        assert_eq!(response.body, DecodedBody::Json(json!({"id": 7})));
        assert_eq!(response.headers.len(), 1);
    }

    #[test]
    fn test_normalize_assertions() {
        let step = StepNormalizer::normalize(&execution());

        assert_eq!(
            step.assertions,
            vec![
                NormalizedAssertion {
                    name: "status is 201".to_string(),
                    skipped: false,
                    failed: false,
                    error_message: None,
                },
                NormalizedAssertion {
                    name: "has location".to_string(),
                    skipped: false,
                    failed: true,
                    error_message: Some("expected header location".to_string()),
                },
                NormalizedAssertion {
                    name: "schema".to_string(),
                    skipped: true,
                    failed: false,
                    error_message: None,
                },
            ]
        );
    }

    #[test]
    fn test_request_error_drops_response() {
        let mut execution = execution();
        execution.request_error = Some(RawError::from("connect ECONNREFUSED"));

        let step = StepNormalizer::normalize(&execution);

        assert_eq!(step.request.error.as_deref(), Some("connect ECONNREFUSED"));
        assert!(step.response.is_none());
        assert!(step.failed());
    }

    #[test]
    fn test_png_response_is_truncated() {
        let mut execution = execution();
        execution.response = Some(RawResponse {
            code: 200,
            header: vec![RawHeader::new("Content-Type", "image/png")].into(),
            stream: Some(RawBody::from_bytes(vec![0x89, 0x50, 0x4e, 0x47])),
            ..Default::default()
        });

        let step = StepNormalizer::normalize(&execution);
        let body = step.response.map(|r| r.body);

        assert_eq!(body, Some(DecodedBody::Text(PNG_TRUNCATED.to_string())));
    }

    #[test]
    fn test_missing_parts_are_empty() {
        let execution = RawExecution {
            response: Some(RawResponse::default()),
            ..Default::default()
        };

        let step = StepNormalizer::normalize(&execution);

        assert!(step.request.headers.is_empty());
        assert_eq!(step.request.body, None);
        assert!(step.assertions.is_empty());
        let response = step.response.expect("response should be present");
        assert!(response.headers.is_empty());
        assert_eq!(response.body, DecodedBody::Text(String::new()));
    }

    #[test]
    fn test_normalize_empty_body_and_null_header() {
        let execution: RawExecution = serde_json::from_value(json!({
            "item": {"name": "Ping"},
            "request": {
                "url": "http://localhost/ping",
                "method": "POST",
                "header": [
                    {"key": "Accept", "value": "*/*", "system": true},
                    {"key": "X-Token", "value": null}
                ],
                "body": {}
            },
            "response": {"code": 204, "status": "No Content", "responseTime": 3}
        }))
        .unwrap();

        let step = StepNormalizer::normalize(&execution);

        assert_eq!(step.request.headers["X-Token"], "");
        assert_eq!(step.request.headers["Accept"], "*/*");
        assert_eq!(step.request.body, Some(DecodedBody::Text(String::new())));
        assert_eq!(step.response.map(|r| r.code), Some(204));
    }

    #[test]
    fn test_no_response_recorded() {
        let execution = RawExecution::default();
        let step = StepNormalizer::normalize(&execution);

        assert!(step.response.is_none());
        assert!(step.request.error.is_none());
    }
}
