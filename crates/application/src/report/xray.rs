//! Test-execution import document builder.
//!
//! Every execution must map to a test of the configured project. The build
//! runs in two passes: executions are grouped and folded per test key, then
//! each aggregate is rendered with bookkeeping timestamps.

use std::time::Duration;

use chrono::TimeDelta;
use indexmap::IndexMap;
use steplight_domain::{
    DomainResult, ExecutionOutcome, ExecutionVerdict, RawAssertion, RawExecution, RawRunSummary,
    TestKey, TestKeyAggregate, TestStatus, XrayDocument, XrayInfo, XrayKeys, XrayTest,
    format_datetime, format_timestamp,
};

use crate::ports::Clock;

const DESCRIPTION: &str = "Results of an automated API collection run";

/// Builds the Xray document (engine `xray-json`).
pub struct XrayExporter;

impl XrayExporter {
    /// Aggregates executions per test key and renders the import document.
    ///
    /// # Errors
    ///
    /// Fails without partial output if any step name lacks a test key, if a
    /// key does not belong to the project, or if the run timings cannot be
    /// rendered.
    pub fn export(
        summary: &RawRunSummary,
        keys: &XrayKeys,
        clock: &impl Clock,
    ) -> DomainResult<XrayDocument> {
        let aggregates = Self::aggregate(&summary.run.executions, &keys.project_key)?;

        let offset = clock.local_offset();
        let timings = summary.run.timings;
        let name = summary.collection.name().unwrap_or("collection");

        let info = XrayInfo {
            project: keys.project_key.clone(),
            summary: format!("Automated run of {name}"),
            description: DESCRIPTION.to_string(),
            start_date: format_timestamp(timings.started, offset)?,
            finish_date: format_timestamp(timings.completed, offset)?,
            test_environments: summary.environment.name.iter().cloned().collect(),
        };

        let now = clock.now();
        let tests = aggregates
            .iter()
            .map(|aggregate| {
                let elapsed = Duration::try_from_secs_f64(aggregate.response_time_secs())
                    .ok()
                    .and_then(|d| TimeDelta::from_std(d).ok())
                    .unwrap_or_else(TimeDelta::zero);
                let finish = now.checked_add_signed(elapsed).unwrap_or(now);

                XrayTest {
                    test_key: aggregate.key().clone(),
                    start: format_datetime(now, offset),
                    finish: format_datetime(finish, offset),
                    comment: aggregate.comments().join("\n"),
                    status: aggregate.status(),
                }
            })
            .collect();

        Ok(XrayDocument {
            test_execution_key: keys.test_execution_key.clone(),
            info,
            tests,
        })
    }

    /// Groups executions by test key in first-seen order and folds each
    /// group in execution order.
    ///
    /// # Errors
    ///
    /// Returns the first key extraction failure.
    pub fn aggregate(
        executions: &[RawExecution],
        project_key: &str,
    ) -> DomainResult<Vec<TestKeyAggregate>> {
        let mut groups: IndexMap<TestKey, Vec<&RawExecution>> = IndexMap::new();
        for execution in executions {
            let key = TestKey::extract(execution.name(), project_key)?;
            groups.entry(key).or_default().push(execution);
        }

        Ok(groups
            .into_iter()
            .map(|(key, group)| {
                group
                    .into_iter()
                    .map(Self::verdict)
                    .fold(TestKeyAggregate::new(key), TestKeyAggregate::fold)
            })
            .collect())
    }

    /// What one execution contributes to its test.
    #[must_use]
    pub fn verdict(execution: &RawExecution) -> ExecutionVerdict {
        let mut comment_lines: Vec<String> =
            execution.assertions.iter().map(Self::assertion_line).collect();

        let response_time_secs = match execution.outcome() {
            ExecutionOutcome::RequestFailed(error) => {
                comment_lines.push(format!("[ERROR] request failed: {}", error.message()));
                0.0
            }
            ExecutionOutcome::Responded(response) => {
                Duration::from_millis(response.response_time).as_secs_f64()
            }
            ExecutionOutcome::NoResponse => 0.0,
        };

        ExecutionVerdict {
            status: if execution.has_failures() {
                TestStatus::Failed
            } else {
                TestStatus::Passed
            },
            comment_lines,
            response_time_secs,
        }
    }

    fn assertion_line(assertion: &RawAssertion) -> String {
        match &assertion.error {
            Some(error) => format!("[FAILED] {}: {}", assertion.assertion, error.message()),
            None if assertion.skipped => format!("[SKIPPED] {}", assertion.assertion),
            None => format!("[PASSED] {}", assertion.assertion),
        }
    }
}
