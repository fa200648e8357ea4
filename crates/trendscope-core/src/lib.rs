//! Trendscope Core Library
//!
//! Turns a free-text research topic into an LLM-authored research proposal
//! by chaining three stages:
//! - Collector: recent news snippets for the topic (GNews-compatible API)
//! - Extractor: ranked noun-phrase keywords across the snippets
//! - Synthesizer: a markdown report from an OpenAI-compatible LLM service
//!
//! Stages run strictly in sequence, each fails soft to a safe default, and
//! the pipeline driver contains anything unexpected — callers always get a
//! well-formed [`PipelineResult`].

pub mod collector;
pub mod config;
pub mod error;
pub mod extractor;
pub mod pipeline;
pub mod synthesizer;

pub use collector::{Collector, Snippet, SnippetSource, SNIPPET_MAX_LEN};
pub use config::{Config, LlmServiceConfig, SearchConfig};
pub use error::{Error, Result, TrendscopeError};
pub use extractor::{
    ChunkLexicon, Extractor, RankedPhrase, MODEL_UNAVAILABLE_SENTINEL, TOP_PHRASES,
};
pub use pipeline::{Pipeline, PipelineResult};
pub use synthesizer::{
    ChatMessage, ReportGenerator, Synthesizer, REPORT_FAILURE_SENTINEL, REPORT_MAX_TOKENS,
    REPORT_TEMPERATURE,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "trendscope";

/// Wire up the production pipeline from configuration.
///
/// Fresh stage instances per call; nothing is shared across runs.
pub fn build_pipeline(config: &Config) -> Result<Pipeline<Collector, Synthesizer>> {
    let collector = Collector::new(config.search.clone())?;
    let extractor = Extractor::new();
    let synthesizer = Synthesizer::new(config.llm.clone())?;
    Ok(Pipeline::new(collector, extractor, synthesizer))
}
