//! Pipeline orchestration: Collector → Extractor → Synthesizer

use crate::collector::SnippetSource;
use crate::extractor::{Extractor, RankedPhrase};
use crate::synthesizer::{ReportGenerator, REPORT_FAILURE_SENTINEL};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::panic::AssertUnwindSafe;

/// Result handed back to the caller after a pipeline run.
///
/// Serializes to the request-boundary shape:
/// `{"keywords": [["phrase", count], ...], "report": "..."}` on success, with
/// an `"error"` field added only when an unexpected fault was contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub keywords: Vec<RankedPhrase>,
    pub report: String,
}

impl PipelineResult {
    fn completed(keywords: Vec<RankedPhrase>, report: String) -> Self {
        Self {
            error: None,
            keywords,
            report,
        }
    }

    fn fault(message: String) -> Self {
        Self {
            error: Some(message),
            keywords: Vec::new(),
            report: REPORT_FAILURE_SENTINEL.to_string(),
        }
    }
}

/// Stateless driver for the three pipeline stages.
///
/// Stages run strictly in order and each stage's output is passed to the
/// next unchanged; intermediate validation lives inside each stage's own
/// fail-soft policy, so inserting a stage never touches the driver.
pub struct Pipeline<S: SnippetSource, G: ReportGenerator> {
    source: S,
    extractor: Extractor,
    generator: G,
}

impl<S: SnippetSource, G: ReportGenerator> Pipeline<S, G> {
    pub fn new(source: S, extractor: Extractor, generator: G) -> Self {
        Self {
            source,
            extractor,
            generator,
        }
    }

    /// Run the full pipeline for one query.
    ///
    /// Anticipated provider failures never reach this level; each stage
    /// degrades to its documented default. A panic escaping all three
    /// stages is contained here and reported through the `error` field,
    /// so the caller always receives a well-formed result.
    pub async fn run(&self, query: &str, model: &str) -> PipelineResult {
        let staged = async {
            let snippets = self.source.fetch(query).await;
            tracing::debug!("Pipeline collected {} snippets", snippets.len());

            let keywords = self.extractor.extract(&snippets);
            tracing::debug!("Pipeline ranked {} phrases", keywords.len());

            let report = self.generator.synthesize(&keywords, model).await;
            PipelineResult::completed(keywords, report)
        };

        match AssertUnwindSafe(staged).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => {
                let message = panic_message(panic);
                tracing::error!("Pipeline fault contained: {}", message);
                PipelineResult::fault(message)
            }
        }
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown pipeline fault".to_string()
    }
}
