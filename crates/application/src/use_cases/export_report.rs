//! Export report use case
//!
//! Invoked once per completed run. Validates the reporter options, builds
//! the document for the selected engine and registers it with the host.

use std::path::PathBuf;

use steplight_domain::{
    DEFAULT_EXPORT_FILE, EXPORT_NAME, ExportDocument, ExportPlan, RawError, RawRunSummary,
    ReporterOptions,
};

use crate::error::ApplicationResult;
use crate::ports::{Clock, ExportRegistry, ReportExport};
use crate::report::{LightExporter, StepsExporter, XrayExporter};

/// What happened to a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReportOutput {
    /// An export was registered.
    Registered {
        /// Configured destination, if any.
        path: Option<PathBuf>,
    },
    /// The run itself failed; nothing was exported.
    Skipped {
        /// Message of the run-level error.
        reason: String,
    },
}

/// Builds and registers the step export of a completed run.
pub struct ExportReport<C> {
    clock: C,
    options: ReporterOptions,
}

impl<C: Clock> ExportReport<C> {
    /// Creates a new `ExportReport` use case.
    pub const fn new(clock: C, options: ReporterOptions) -> Self {
        Self { clock, options }
    }

    /// Builds the export for a run summary.
    ///
    /// Options are validated before any transformation work.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for missing options and a
    /// transformation error when the summary cannot be mapped.
    pub fn build(&self, summary: &RawRunSummary) -> ApplicationResult<ReportExport> {
        let plan = self.options.validate()?;
        let path = plan.path().cloned();

        let content: ExportDocument = match &plan {
            ExportPlan::Steps { include_stats, .. } => {
                StepsExporter::export(summary, *include_stats, &self.clock)?.into()
            }
            ExportPlan::Light { include_stats, .. } => {
                LightExporter::export(summary, *include_stats).into()
            }
            ExportPlan::Xray { keys, .. } => {
                XrayExporter::export(summary, keys, &self.clock)?.into()
            }
        };

        Ok(ReportExport {
            name: EXPORT_NAME,
            default_file_name: DEFAULT_EXPORT_FILE,
            path,
            content,
        })
    }

    /// Run-completion callback.
    ///
    /// A run-level error, passed in or recorded in the summary, skips the
    /// export. Otherwise the document is built and registered exactly once.
    ///
    /// # Errors
    ///
    /// Propagates [`ExportReport::build`] failures; nothing is registered.
    pub fn on_run_done<R: ExportRegistry>(
        &self,
        run_error: Option<&RawError>,
        summary: &RawRunSummary,
        registry: &mut R,
    ) -> ApplicationResult<ExportReportOutput> {
        if let Some(error) = run_error.or(summary.run.error.as_ref()) {
            tracing::warn!(error = error.message(), "run failed, skipping step export");
            return Ok(ExportReportOutput::Skipped {
                reason: error.message().to_string(),
            });
        }

        let export = self.build(summary).inspect_err(|e| {
            tracing::error!(error = %e, engine = %self.options.exporter_engine, "step export failed");
        })?;

        tracing::info!(
            engine = %self.options.exporter_engine,
            executions = summary.run.executions.len(),
            "step export registered"
        );
        let path = export.path.clone();
        registry.register(export);
        Ok(ExportReportOutput::Registered { path })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::test_support::FixedClock;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use steplight_domain::{DomainError, ExporterEngine};

    #[derive(Default)]
    struct Collected(Vec<ReportExport>);

    impl ExportRegistry for Collected {
        fn register(&mut self, export: ReportExport) {
            self.0.push(export);
        }
    }

    fn summary() -> RawRunSummary {
        serde_json::from_value(json!({
            "collection": {"name": "Shop API"},
            "run": {
                "timings": {"started": 1000, "completed": 2500},
                "executions": [
                    {"item": {"name": "[PROJ-1] Login"},
                     "response": {"code": 200, "responseTime": 20},
                     "assertions": [{"assertion": "ok", "skipped": false}]}
                ]
            }
        }))
        .unwrap()
    }

    fn steps_options() -> ReporterOptions {
        ReporterOptions {
            export_path: Some(PathBuf::from("out/steps.json")),
            ..Default::default()
        }
    }

    #[test]
    fn test_registers_steps_export() {
        let use_case = ExportReport::new(FixedClock::utc(), steps_options());
        let mut registry = Collected::default();

        let output = use_case.on_run_done(None, &summary(), &mut registry).unwrap();

        assert_eq!(
            output,
            ExportReportOutput::Registered {
                path: Some(PathBuf::from("out/steps.json"))
            }
        );
        assert_eq!(registry.0.len(), 1);
        let export = &registry.0[0];
        assert_eq!(export.name, "json-steps-reporter");
        assert_eq!(export.default_file_name, "newman-step-results.json");
        let ExportDocument::Steps(document) = &export.content else {
            panic!("expected a steps document");
        };
        assert_eq!(document.info.duration, 1500);
    }

    #[test]
    fn test_light_engine() {
        let options = ReporterOptions {
            exporter_engine: ExporterEngine::Light,
            ..steps_options()
        };
        let export = ExportReport::new(FixedClock::utc(), options)
            .build(&summary())
            .unwrap();

        assert!(matches!(export.content, ExportDocument::Light(_)));
    }

    #[test]
    fn test_xray_engine_without_path_uses_default_file() {
        let options = ReporterOptions {
            exporter_engine: ExporterEngine::XrayJson,
            xray_project_key: Some("PROJ".to_string()),
            xray_test_execution_key: Some("PROJ-100".to_string()),
            ..Default::default()
        };
        let export = ExportReport::new(FixedClock::utc(), options)
            .build(&summary())
            .unwrap();

        assert_eq!(export.path, None);
        let ExportDocument::Xray(document) = export.content else {
            panic!("expected an xray document");
        };
        assert_eq!(document.test_execution_key, "PROJ-100");
    }

    #[test]
    fn test_xray_missing_project_key_is_configuration_error() {
        let options = ReporterOptions {
            exporter_engine: ExporterEngine::XrayJson,
            xray_test_execution_key: Some("PROJ-100".to_string()),
            ..Default::default()
        };
        let use_case = ExportReport::new(FixedClock::utc(), options);
        let mut registry = Collected::default();

        let err = use_case
            .on_run_done(None, &summary(), &mut registry)
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Configuration(DomainError::MissingOption("xrayProjectKey"))
        ));
        assert!(registry.0.is_empty());
    }

    #[test]
    fn test_foreign_key_registers_nothing() {
        let options = ReporterOptions {
            exporter_engine: ExporterEngine::XrayJson,
            xray_project_key: Some("OPS".to_string()),
            xray_test_execution_key: Some("OPS-1".to_string()),
            ..Default::default()
        };
        let use_case = ExportReport::new(FixedClock::utc(), options);
        let mut registry = Collected::default();

        let err = use_case
            .on_run_done(None, &summary(), &mut registry)
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Transformation(_)));
        assert!(registry.0.is_empty());
    }

    #[test]
    fn test_run_error_skips_export() {
        let use_case = ExportReport::new(FixedClock::utc(), ReporterOptions::default());
        let mut registry = Collected::default();
        let run_error = RawError::from("collection could not be loaded");

        let output = use_case
            .on_run_done(Some(&run_error), &summary(), &mut registry)
            .unwrap();

        assert_eq!(
            output,
            ExportReportOutput::Skipped {
                reason: "collection could not be loaded".to_string()
            }
        );
        assert!(registry.0.is_empty());
    }

    #[test]
    fn test_run_error_recorded_in_summary_skips_export() {
        let use_case = ExportReport::new(FixedClock::utc(), steps_options());
        let mut registry = Collected::default();
        let mut summary = summary();
        summary.run.error = Some(RawError::from("aborted"));

        let output = use_case
            .on_run_done(None, &summary, &mut registry)
            .unwrap();

        assert!(matches!(output, ExportReportOutput::Skipped { .. }));
        assert!(registry.0.is_empty());
    }
}
