//! Error types for trendscope

use thiserror::Error;

/// Result type alias using TrendscopeError
pub type Result<T> = std::result::Result<T, TrendscopeError>;

/// Error type alias for convenience
pub type Error = TrendscopeError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for trendscope
///
/// The stage-level failure taxonomy maps onto three variants:
/// `Source` (news provider unreachable or errors), `Chunker` (linguistic
/// lexicon not loaded), and `Llm` (report generation failed). Each stage
/// recovers these locally and degrades to its documented default; they
/// surface here only on the internal fallible paths.
#[derive(Debug, Error)]
pub enum TrendscopeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("News source error: {0}")]
    Source(String),

    #[error("Chunker error: {0}")]
    Chunker(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External service error: {0}")]
    ExternalError(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl TrendscopeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::Config(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
