//! Compact per-step document builder.

use steplight_domain::summary::RawDescription;
use steplight_domain::{DomainResult, RawRunSummary, StepsDocument, StepsInfo, format_timestamp};

use super::StepNormalizer;
use crate::ports::Clock;

/// Builds the steps document (engine `default`).
pub struct StepsExporter;

impl StepsExporter {
    /// Assembles run metadata and one normalized step per execution.
    ///
    /// # Errors
    ///
    /// Returns an error if the run start cannot be rendered as a timestamp.
    pub fn export(
        summary: &RawRunSummary,
        include_stats: bool,
        clock: &impl Clock,
    ) -> DomainResult<StepsDocument> {
        let collection = &summary.collection;
        let timings = summary.run.timings;

        let info = StepsInfo {
            name: collection.name().map(str::to_string),
            description: collection
                .description()
                .and_then(RawDescription::plain_text)
                .map(str::to_string),
            env: summary.environment.name.clone(),
            start_date: timings.started,
            finish_date: timings.completed,
            duration: timings.duration_ms(),
            started: format_timestamp(timings.started, clock.local_offset())?,
        };

        Ok(StepsDocument {
            info,
            steps: summary
                .run
                .executions
                .iter()
                .map(StepNormalizer::normalize)
                .collect(),
            stats: include_stats.then(|| summary.run.stats.clone()),
        })
    }
}
