//! Reporter options.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Name the export is registered under.
pub const EXPORT_NAME: &str = "json-steps-reporter";

/// File name used when no export path is configured.
pub const DEFAULT_EXPORT_FILE: &str = "newman-step-results.json";

/// Selects which document a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExporterEngine {
    /// Compact per-step document.
    #[default]
    Default,
    /// Collection-centric document.
    Light,
    /// Test-execution import document.
    XrayJson,
}

impl ExporterEngine {
    /// Option value of this engine.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::XrayJson => "xray-json",
        }
    }
}

impl fmt::Display for ExporterEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExporterEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "xray-json" => Ok(Self::XrayJson),
            other => Err(format!(
                "unknown exporter engine '{other}' (expected default, light or xray-json)"
            )),
        }
    }
}

/// Options recognized by the reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporterOptions {
    /// Destination of the export.
    #[serde(default, alias = "jsonStepsExport")]
    pub export_path: Option<PathBuf>,
    /// Include the raw run stats block.
    #[serde(default, alias = "jsonStepsStats")]
    pub include_step_stats: bool,
    /// Document to produce.
    #[serde(default)]
    pub exporter_engine: ExporterEngine,
    /// Project key tests must belong to (xray only).
    #[serde(default)]
    pub xray_project_key: Option<String>,
    /// Test execution to import into (xray only).
    #[serde(default)]
    pub xray_test_execution_key: Option<String>,
}

/// Keys required by the Xray engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrayKeys {
    /// Project key tests must belong to.
    pub project_key: String,
    /// Test execution to import into.
    pub test_execution_key: String,
}

/// A validated export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPlan {
    /// Build the steps document.
    Steps {
        /// Destination.
        path: PathBuf,
        /// Include run stats.
        include_stats: bool,
    },
    /// Build the light document.
    Light {
        /// Destination.
        path: PathBuf,
        /// Include run stats.
        include_stats: bool,
    },
    /// Build the Xray document.
    Xray {
        /// Destination; the default file name when absent.
        path: Option<PathBuf>,
        /// Project and execution keys.
        keys: XrayKeys,
    },
}

impl ExportPlan {
    /// Destination of the export, if configured.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Steps { path, .. } | Self::Light { path, .. } => Some(path),
            Self::Xray { path, .. } => path.as_ref(),
        }
    }
}

fn required(value: Option<&String>, option: &'static str) -> DomainResult<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(DomainError::MissingOption(option))
}

impl ReporterOptions {
    /// Checks that every option the selected engine needs is present.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingOption`] naming the first missing option.
    pub fn validate(&self) -> DomainResult<ExportPlan> {
        match self.exporter_engine {
            ExporterEngine::Default => Ok(ExportPlan::Steps {
                path: self.require_path()?,
                include_stats: self.include_step_stats,
            }),
            ExporterEngine::Light => Ok(ExportPlan::Light {
                path: self.require_path()?,
                include_stats: self.include_step_stats,
            }),
            ExporterEngine::XrayJson => Ok(ExportPlan::Xray {
                path: self.export_path.clone(),
                keys: XrayKeys {
                    project_key: required(self.xray_project_key.as_ref(), "xrayProjectKey")?,
                    test_execution_key: required(
                        self.xray_test_execution_key.as_ref(),
                        "xrayTestExecutionKey",
                    )?,
                },
            }),
        }
    }

    fn require_path(&self) -> DomainResult<PathBuf> {
        self.export_path
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(DomainError::MissingOption("exportPath"))
    }
}
