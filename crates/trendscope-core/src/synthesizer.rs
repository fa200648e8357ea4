//! Report synthesizer stage: prompts an external LLM with ranked phrases

use crate::config::LlmServiceConfig;
use crate::error::{Result, TrendscopeError};
use crate::extractor::RankedPhrase;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sampling temperature for report generation
pub const REPORT_TEMPERATURE: f32 = 0.7;

/// Output-length cap for report generation
pub const REPORT_MAX_TOKENS: u32 = 600;

/// Report returned whenever generation fails for any reason
pub const REPORT_FAILURE_SENTINEL: &str = "⚠️ Failed to generate report.";

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Generator of reports from ranked phrases
///
/// Fail-soft by contract: implementations always return a string-typed
/// report, substituting the failure sentinel on provider errors.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn synthesize(&self, ranked: &[RankedPhrase], model: &str) -> String;
}

/// Synthesizer backed by an OpenAI-compatible chat-completions service
pub struct Synthesizer {
    http_client: reqwest::Client,
    config: LlmServiceConfig,
}

impl Synthesizer {
    /// Create a new synthesizer from explicit configuration
    pub fn new(config: LlmServiceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TrendscopeError::Http)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Fallible generation path: one chat-completion request
    async fn request_report(&self, ranked: &[RankedPhrase], model: &str) -> Result<String> {
        #[derive(Serialize)]
        struct ChatRequest {
            model: String,
            messages: Vec<ChatMessage>,
            temperature: f32,
            max_tokens: u32,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatMessage,
        }

        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user(build_prompt(ranked))],
            temperature: REPORT_TEMPERATURE,
            max_tokens: REPORT_MAX_TOKENS,
        };

        let url = format!("{}/v1/chat/completions", self.config.url);

        let mut req = self.http_client.post(&url).json(&request);
        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await.map_err(TrendscopeError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TrendscopeError::ExternalError(format!(
                "LLM service error (HTTP {}): {}",
                status, body
            )));
        }

        let chat_response: ChatResponse =
            response.json().await.map_err(TrendscopeError::Http)?;

        let content = chat_response
            .choices
            .first()
            .ok_or_else(|| TrendscopeError::Llm("No response from LLM".to_string()))?
            .message
            .content
            .clone();

        Ok(content)
    }
}

#[async_trait]
impl ReportGenerator for Synthesizer {
    /// Generate a report, degrading to the failure sentinel on any error
    async fn synthesize(&self, ranked: &[RankedPhrase], model: &str) -> String {
        match self.request_report(ranked, model).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("Report generation failed: {}", e);
                REPORT_FAILURE_SENTINEL.to_string()
            }
        }
    }
}

/// Build the fixed report prompt from ranked phrases (counts discarded)
fn build_prompt(ranked: &[RankedPhrase]) -> String {
    let topics = ranked
        .iter()
        .map(|p| p.phrase.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Using the following trending topics in AI:\n{}\n\n\
         Suggest 3 innovative research directions.\n\n\
         Respond in **Markdown** with headings, justification, and clarity.\n",
        topics
    )
}
