//! Configuration management

use crate::error::{Result, TrendscopeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// News search provider configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// LLM service configuration
    #[serde(default)]
    pub llm: LlmServiceConfig,
}

/// News search provider configuration (GNews-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint URL
    pub endpoint: String,

    /// API token (optional for self-hosted mirrors)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Number of articles to request per query
    #[serde(default = "default_max_articles")]
    pub max_articles: u32,

    /// Request timeout in seconds (short; the provider call is fail-soft)
    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("TRENDSCOPE_GNEWS_ENDPOINT")
                .unwrap_or_else(|_| "https://gnews.io/api/v4/search".to_string()),
            api_key: std::env::var("TRENDSCOPE_GNEWS_KEY").ok(),
            max_articles: default_max_articles(),
            timeout_secs: default_search_timeout(),
        }
    }
}

/// LLM service configuration for external inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmServiceConfig {
    /// Base URL of the LLM service for chat/completions
    pub url: String,

    /// Default model for report synthesis (callers may override per run)
    #[serde(default = "default_chat_model")]
    pub model: String,

    /// API key (optional, for authenticated services)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmServiceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("TRENDSCOPE_LLM_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai".to_string()),
            model: default_chat_model(),
            api_key: std::env::var("TRENDSCOPE_LLM_API_KEY").ok(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

fn default_chat_model() -> String {
    std::env::var("TRENDSCOPE_LLM_MODEL").unwrap_or_else(|_| "llama3-8b-8192".to_string())
}

fn default_max_articles() -> u32 {
    3
}

fn default_search_timeout() -> u64 {
    5
}

fn default_llm_timeout() -> u64 {
    45
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load config from an explicit path, falling back to env-driven defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content).map_err(|e| {
                TrendscopeError::Config(format!("{}: {}", path.display(), e))
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config path: ~/.config/trendscope/config.yaml
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config.search.max_articles, 3);
        assert_eq!(config.llm.timeout_secs, 45);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.search.endpoint = "http://localhost:9999/search".to_string();
        config.search.api_key = Some("secret".to_string());
        config.llm.model = "mixtral-8x7b-32768".to_string();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.search.endpoint, "http://localhost:9999/search");
        assert_eq!(reloaded.search.api_key.as_deref(), Some("secret"));
        assert_eq!(reloaded.llm.model, "mixtral-8x7b-32768");
    }

    #[test]
    fn test_malformed_yaml_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "search: [not, a, mapping\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, TrendscopeError::Config(_)));
        assert_eq!(err.exit_code(), crate::error::exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "search:\n  endpoint: http://example.test/v4/search\nllm:\n  url: http://example.test\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.search.endpoint, "http://example.test/v4/search");
        assert_eq!(config.search.max_articles, 3);
        assert_eq!(config.llm.model, "llama3-8b-8192");
    }
}
