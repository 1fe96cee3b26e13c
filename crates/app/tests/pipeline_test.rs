//! Integration tests for the export pipeline
//!
//! These tests read a summary from disk, build the export through the
//! use case and write it back with the file-based adapters.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::tempdir;

use steplight_application::{
    ApplicationError, Clock, ExportReport, ExportReportOutput, ports::FileSystem,
};
use steplight_domain::{DomainError, ExporterEngine, ReporterOptions};
use steplight_infrastructure::{ExportWriter, InputReader, PendingExports, TokioFileSystem};

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn local_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }
}

fn summary() -> Value {
    json!({
        "collection": {"info": {"name": "Shop API", "description": "Smoke tests"}},
        "environment": {"name": "staging"},
        "run": {
            "stats": {"assertions": {"total": 3, "pending": 0, "failed": 1}},
            "timings": {"started": 1_614_834_367_089_i64, "completed": 1_614_834_368_589_i64},
            "executions": [
                {
                    "id": "e1",
                    "item": {"name": "[SHOP-1] List products"},
                    "request": {
                        "url": {"protocol": "https", "host": ["api", "shop", "test"],
                                "path": ["products"], "query": [{"key": "page", "value": "1"}]},
                        "method": "GET",
                        "header": [{"key": "Accept", "value": "application/json"}]
                    },
                    "response": {
                        "code": 200, "status": "OK", "responseTime": 250,
                        "header": [{"key": "Content-Type", "value": "application/json"}],
                        "stream": {"type": "Buffer", "data": [91, 93]}
                    },
                    "assertions": [{"assertion": "status is 200", "skipped": false}]
                },
                {
                    "id": "e2",
                    "item": {"name": "[SHOP-2] Checkout"},
                    "request": {"url": "https://api.shop.test/checkout", "method": "POST"},
                    "response": {"code": 500, "status": "Internal Server Error", "responseTime": 750},
                    "assertions": [
                        {"assertion": "status is 201", "skipped": false,
                         "error": {"name": "AssertionError", "message": "expected 500 to equal 201"}},
                        {"assertion": "has order id", "skipped": true}
                    ]
                }
            ]
        }
    })
}

async fn run(dir: &Path, options: ReporterOptions) -> Result<Value, ApplicationError> {
    let summary_path = dir.join("summary.json");
    std::fs::write(&summary_path, serde_json::to_vec(&summary()).unwrap()).unwrap();

    let fs = TokioFileSystem::new();
    let summary = InputReader::new(fs.clone())
        .read_summary(&summary_path)
        .await
        .expect("summary should load");

    let mut exports = PendingExports::new();
    let output = ExportReport::new(FixedClock, options).on_run_done(None, &summary, &mut exports)?;
    assert!(matches!(output, ExportReportOutput::Registered { .. }));

    let writer = ExportWriter::new(fs.clone(), dir);
    let mut written = Vec::new();
    for export in exports.drain() {
        written.push(writer.write(&export).await.expect("export should be written"));
    }
    assert_eq!(written.len(), 1);

    let bytes = fs.read_file(&written[0]).await.unwrap();
    Ok(serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_steps_export_end_to_end() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = ReporterOptions {
        export_path: Some(dir.path().join("reports/steps.json")),
        include_step_stats: true,
        ..Default::default()
    };

    let document = run(dir.path(), options).await.unwrap();

    assert_eq!(document["info"]["name"], "Shop API");
    assert_eq!(document["info"]["env"], "staging");
    assert_eq!(document["info"]["duration"], 1500);
    assert_eq!(document["info"]["started"], "2021-03-04T07:06:07.089+02:00");
    assert_eq!(document["stats"]["assertions"]["failed"], 1);

    let first = &document["steps"][0];
    assert_eq!(first["request"]["url"], "https://api.shop.test/products?page=1");
    assert_eq!(first["request"]["headers"]["Accept"], "application/json");
    assert_eq!(first["response"]["body"], json!([]));
    assert_eq!(first["response"]["duration"], 250);

    let second = &document["steps"][1];
    assert_eq!(second["assertions"][0]["failed"], true);
    assert_eq!(second["assertions"][1]["skipped"], true);
    assert_eq!(second["response"]["body"], "");
}

#[tokio::test]
async fn test_xray_export_end_to_end() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = ReporterOptions {
        exporter_engine: ExporterEngine::XrayJson,
        xray_project_key: Some("SHOP".to_string()),
        xray_test_execution_key: Some("SHOP-99".to_string()),
        ..Default::default()
    };

    let document = run(dir.path(), options).await.unwrap();

    assert!(dir.path().join("newman-step-results.json").exists());
    assert_eq!(document["testExecutionKey"], "SHOP-99");
    assert_eq!(document["info"]["project"], "SHOP");
    assert_eq!(document["info"]["testEnvironments"], json!(["staging"]));

    let tests = document["tests"].as_array().unwrap();
    assert_eq!(tests.len(), 2);
    assert_eq!(tests[0]["testKey"], "SHOP-1");
    assert_eq!(tests[0]["status"], "PASSED");
    assert_eq!(tests[0]["start"], "2024-05-01T14:00:00.000+02:00");
    assert_eq!(tests[0]["finish"], "2024-05-01T14:00:00.250+02:00");
    assert_eq!(tests[1]["testKey"], "SHOP-2");
    assert_eq!(tests[1]["status"], "FAILED");
    assert_eq!(
        tests[1]["comment"],
        "[FAILED] status is 201: expected 500 to equal 201\n[SKIPPED] has order id"
    );
}

#[tokio::test]
async fn test_xray_without_execution_key_fails() {
    let dir = tempdir().expect("Failed to create temp directory");
    let options = ReporterOptions {
        exporter_engine: ExporterEngine::XrayJson,
        xray_project_key: Some("SHOP".to_string()),
        ..Default::default()
    };

    let err = run(dir.path(), options).await.unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Configuration(DomainError::MissingOption("xrayTestExecutionKey"))
    ));
    assert!(!dir.path().join("newman-step-results.json").exists());
}
