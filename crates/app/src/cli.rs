//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use steplight_domain::{ExporterEngine, ReporterOptions};

/// Export the steps of a collection run summary.
#[derive(Debug, Parser)]
#[command(name = "steplight")]
#[command(author = "Steplight Team")]
#[command(version)]
#[command(about = "Per-step export of collection run summaries", long_about = None)]
pub struct Cli {
    /// Path to the run summary JSON
    pub summary: PathBuf,

    /// Reporter options file (YAML or JSON)
    #[arg(short, long, env = "STEPLIGHT_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Destination of the export
    #[arg(short, long, env = "STEPLIGHT_EXPORT")]
    pub export: Option<PathBuf>,

    /// Include the run stats block
    #[arg(long, env = "STEPLIGHT_STATS")]
    pub stats: bool,

    /// Document to produce (default, light, xray-json)
    #[arg(long, env = "STEPLIGHT_ENGINE")]
    pub engine: Option<ExporterEngine>,

    /// Project key tests must belong to
    #[arg(long, env = "STEPLIGHT_XRAY_PROJECT_KEY")]
    pub xray_project_key: Option<String>,

    /// Test execution to import into
    #[arg(long, env = "STEPLIGHT_XRAY_TEST_EXECUTION_KEY")]
    pub xray_test_execution_key: Option<String>,

    /// Directory for exports without a configured path
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl Cli {
    /// Applies flags on top of options loaded from a file.
    #[must_use]
    pub fn overlay(&self, mut options: ReporterOptions) -> ReporterOptions {
        if let Some(path) = &self.export {
            options.export_path = Some(path.clone());
        }
        if self.stats {
            options.include_step_stats = true;
        }
        if let Some(engine) = self.engine {
            options.exporter_engine = engine;
        }
        if let Some(key) = &self.xray_project_key {
            options.xray_project_key = Some(key.clone());
        }
        if let Some(key) = &self.xray_test_execution_key {
            options.xray_test_execution_key = Some(key.clone());
        }
        options
    }
}
