//! Test-key aggregation for the Xray import format.
//!
//! Executions are grouped by a test key taken from the bracketed token of
//! their display name (`"[PROJ-12] Login"` belongs to `PROJ-12`). Each group
//! folds into a [`TestKeyAggregate`] whose status can only move from
//! `PASSED` to `FAILED`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

#[allow(clippy::expect_used)]
static TEST_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("valid regex"));

/// Identifier of a test in the test-management tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestKey(String);

impl TestKey {
    /// Extracts the first bracketed token of a step name and checks it
    /// belongs to the project.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingTestKey`] if the name has no bracketed
    /// token, and [`DomainError::ForeignTestKey`] if the token does not start
    /// with `project_key`.
    pub fn extract(step_name: &str, project_key: &str) -> DomainResult<Self> {
        let key = TEST_KEY_PATTERN
            .captures(step_name)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .ok_or_else(|| DomainError::MissingTestKey {
                step: step_name.to_string(),
            })?;

        if !key.starts_with(project_key) {
            return Err(DomainError::ForeignTestKey {
                key: key.to_string(),
                step: step_name.to_string(),
                project: project_key.to_string(),
            });
        }

        Ok(Self(key.to_string()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of a test in the import document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    /// Every contributing execution passed.
    #[default]
    Passed,
    /// At least one contributing execution failed.
    Failed,
}

impl TestStatus {
    /// Combines two statuses; `Failed` is absorbing.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Passed, Self::Passed) => Self::Passed,
            _ => Self::Failed,
        }
    }
}

/// What a single execution contributes to its test.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExecutionVerdict {
    /// `Failed` on a request error or any failed assertion.
    pub status: TestStatus,
    /// Human-readable lines describing the execution.
    pub comment_lines: Vec<String>,
    /// Response time in seconds.
    pub response_time_secs: f64,
}

/// Accumulated result of all executions sharing a test key.
#[derive(Debug, Clone, PartialEq)]
pub struct TestKeyAggregate {
    key: TestKey,
    status: TestStatus,
    comments: Vec<String>,
    response_time_secs: f64,
}

impl TestKeyAggregate {
    /// Starts an empty, passing aggregate.
    #[must_use]
    pub const fn new(key: TestKey) -> Self {
        Self {
            key,
            status: TestStatus::Passed,
            comments: Vec::new(),
            response_time_secs: 0.0,
        }
    }

    /// Returns the aggregate with one more execution folded in.
    #[must_use]
    pub fn fold(self, verdict: ExecutionVerdict) -> Self {
        let mut comments = self.comments;
        comments.extend(verdict.comment_lines);
        Self {
            key: self.key,
            status: self.status.and(verdict.status),
            comments,
            response_time_secs: self.response_time_secs + verdict.response_time_secs,
        }
    }

    /// The test key.
    #[must_use]
    pub const fn key(&self) -> &TestKey {
        &self.key
    }

    /// Cumulative status.
    #[must_use]
    pub const fn status(&self) -> TestStatus {
        self.status
    }

    /// Comment lines in execution order.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Accumulated response time in seconds.
    #[must_use]
    pub const fn response_time_secs(&self) -> f64 {
        self.response_time_secs
    }
}
