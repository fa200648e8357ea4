//! News collector stage: fetches recent article text for a research topic

use crate::config::SearchConfig;
use crate::error::{Result, TrendscopeError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Maximum length of a single snippet in characters
pub const SNIPPET_MAX_LEN: usize = 500;

/// A bounded text fragment taken from one news article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Article text, truncated to [`SNIPPET_MAX_LEN`] characters
    pub text: String,
    /// Article title, kept for provenance display only
    pub source: String,
}

/// Source of snippets for the pipeline
///
/// Fail-soft by contract: implementations never error, they degrade to an
/// empty sequence so downstream stages always receive well-shaped input.
#[async_trait]
pub trait SnippetSource: Send + Sync {
    async fn fetch(&self, query: &str) -> Vec<Snippet>;
}

#[derive(Debug, Deserialize)]
struct ArticlesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Collector backed by a GNews-compatible search endpoint
pub struct Collector {
    client: Client,
    config: SearchConfig,
}

impl Collector {
    /// Create a new collector from explicit configuration
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("trendscope/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TrendscopeError::Http)?;
        Ok(Self { client, config })
    }

    /// Create a collector with a custom client
    pub fn with_client(client: Client, config: SearchConfig) -> Self {
        Self { client, config }
    }

    /// Fallible fetch path: one search request, preprocessed into snippets
    async fn fetch_articles(&self, query: &str) -> Result<Vec<Snippet>> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("lang", "en".to_string()),
            ("max", self.config.max_articles.to_string()),
        ];
        if let Some(ref key) = self.config.api_key {
            params.push(("token", key.clone()));
        }

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TrendscopeError::Source(format!(
                        "Request timeout fetching {}: server took too long to respond",
                        self.config.endpoint
                    ))
                } else if e.is_connect() {
                    TrendscopeError::Source(format!(
                        "Connection error fetching {}: cannot reach server",
                        self.config.endpoint
                    ))
                } else {
                    TrendscopeError::Source(format!("Failed to query news provider: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendscopeError::Source(format!(
                "News provider returned HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown error")
            )));
        }

        let parsed: ArticlesResponse = response
            .json()
            .await
            .map_err(|e| TrendscopeError::Source(format!("Malformed provider payload: {}", e)))?;

        Ok(preprocess_articles(parsed.articles))
    }
}

#[async_trait]
impl SnippetSource for Collector {
    /// Fetch snippets for a query, degrading to empty on any provider failure
    async fn fetch(&self, query: &str) -> Vec<Snippet> {
        match self.fetch_articles(query).await {
            Ok(snippets) => {
                tracing::debug!("Collected {} snippets for query {:?}", snippets.len(), query);
                snippets
            }
            Err(e) => {
                tracing::warn!("News collection failed, continuing with no snippets: {}", e);
                Vec::new()
            }
        }
    }
}

/// Select usable text per article (content preferred over description),
/// truncate, and drop articles with no text. Order is preserved.
fn preprocess_articles(articles: Vec<Article>) -> Vec<Snippet> {
    articles
        .into_iter()
        .filter_map(|article| {
            let text = article
                .content
                .filter(|c| !c.is_empty())
                .or(article.description)
                .filter(|d| !d.is_empty())?;
            Some(Snippet {
                text: truncate_chars(&text, SNIPPET_MAX_LEN),
                source: article.title.unwrap_or_else(|| "Untitled".to_string()),
            })
        })
        .collect()
}

/// Truncate to a character count without splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(
        title: Option<&str>,
        content: Option<&str>,
        description: Option<&str>,
    ) -> Article {
        Article {
            title: title.map(String::from),
            content: content.map(String::from),
            description: description.map(String::from),
        }
    }

    #[test]
    fn test_content_preferred_over_description() {
        let snippets = preprocess_articles(vec![article(
            Some("AI ethics"),
            Some("full body text"),
            Some("short blurb"),
        )]);
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].text, "full body text");
        assert_eq!(snippets[0].source, "AI ethics");
    }

    #[test]
    fn test_description_fallback() {
        let snippets = preprocess_articles(vec![article(None, None, Some("short blurb"))]);
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].text, "short blurb");
        assert_eq!(snippets[0].source, "Untitled");
    }

    #[test]
    fn test_empty_content_falls_back_then_drops() {
        let snippets = preprocess_articles(vec![
            article(Some("a"), Some(""), Some("blurb")),
            article(Some("b"), None, None),
            article(Some("c"), Some(""), Some("")),
        ]);
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].text, "blurb");
    }

    #[test]
    fn test_order_preserved_from_provider() {
        let snippets = preprocess_articles(vec![
            article(Some("first"), Some("one"), None),
            article(Some("second"), Some("two"), None),
        ]);
        let sources: Vec<&str> = snippets.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["first", "second"]);
    }

    #[test]
    fn test_truncation_bounds_snippet_length() {
        let long = "x".repeat(SNIPPET_MAX_LEN + 200);
        let snippets = preprocess_articles(vec![article(None, Some(&long), None)]);
        assert_eq!(snippets[0].text.chars().count(), SNIPPET_MAX_LEN);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(SNIPPET_MAX_LEN + 10);
        let truncated = truncate_chars(&long, SNIPPET_MAX_LEN);
        assert_eq!(truncated.chars().count(), SNIPPET_MAX_LEN);
    }

    #[test]
    fn test_construction_applies_configured_timeout() {
        // Building the client is fallible; a collector is never constructed
        // without its bounded-wait client.
        assert!(Collector::new(SearchConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_degrades_to_empty_on_unreachable_provider() {
        let config = SearchConfig {
            endpoint: "http://127.0.0.1:9/search".to_string(),
            api_key: None,
            max_articles: 3,
            timeout_secs: 1,
        };
        let collector = Collector::new(config).unwrap();
        assert!(collector.fetch("AI ethics").await.is_empty());
    }

    #[test]
    fn test_payload_shape_parses() {
        let raw = r#"{"totalArticles": 2, "articles": [
            {"title": "t1", "content": "c1", "description": "d1", "url": "u"},
            {"title": "t2", "description": "d2"}
        ]}"#;
        let parsed: ArticlesResponse = serde_json::from_str(raw).unwrap();
        let snippets = preprocess_articles(parsed.articles);
        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].text, "c1");
        assert_eq!(snippets[1].text, "d2");
    }
}
