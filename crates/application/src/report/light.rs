//! Collection-centric document builder.

use steplight_domain::{
    ExecutionOutcome, LightCollection, LightDocument, LightExecution, LightResponse, RawExecution,
    RawRunSummary,
};

use super::StepNormalizer;

/// Builds the light document (engine `light`).
///
/// Requests and response headers are passed through as recorded; only
/// response bodies are decoded.
pub struct LightExporter;

impl LightExporter {
    /// Assembles the collection block and one entry per execution.
    #[must_use]
    pub fn export(summary: &RawRunSummary, include_stats: bool) -> LightDocument {
        let collection = &summary.collection;

        LightDocument {
            collection: LightCollection {
                id: collection.id().map(str::to_string),
                name: collection.name().map(str::to_string),
                events: collection.event.as_slice().to_vec(),
                variables: collection.variable.as_slice().to_vec(),
                item_count: collection.item.len(),
                items: collection.item.as_slice().to_vec(),
            },
            environment: summary.environment.name.clone(),
            executions: summary.run.executions.iter().map(Self::execution).collect(),
            stats: include_stats.then(|| summary.run.stats.clone()),
        }
    }

    fn execution(execution: &RawExecution) -> LightExecution {
        let response = match execution.outcome() {
            ExecutionOutcome::Responded(response) => Some(LightResponse {
                headers: response.header.clone(),
                code: response.code,
                status: response.status.clone(),
                body: StepNormalizer::response_body(response),
            }),
            ExecutionOutcome::RequestFailed(_) | ExecutionOutcome::NoResponse => None,
        };

        LightExecution {
            id: execution.id.clone(),
            request: execution.request.clone(),
            request_error: execution.request_error.clone(),
            response,
            assertions: StepNormalizer::assertions(&execution.assertions),
        }
    }
}
