//! Fetch command: collector stage only

use crate::app::{OutputFormat, QueryArgs};
use anyhow::Result;
use trendscope_core::{Collector, Config, Snippet, SnippetSource};

pub async fn run(args: QueryArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let query = args.query.join(" ");
    let collector = Collector::new(config.search.clone())?;
    let snippets = collector.fetch(&query).await;

    print!("{}", format_snippets(&snippets, format));
    if snippets.is_empty() && format == OutputFormat::Cli {
        eprintln!("No snippets collected for {:?}", query);
    }
    Ok(())
}

fn format_snippets(snippets: &[Snippet], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = snippets
                .iter()
                .map(|s| serde_json::json!({"source": s.source, "text": s.text}))
                .collect();
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
        }
        OutputFormat::Md => {
            let mut out = String::new();
            for snippet in snippets {
                out.push_str(&format!("## {}\n\n{}\n\n", snippet.source, snippet.text));
            }
            out
        }
        OutputFormat::Cli => {
            let mut out = String::new();
            for snippet in snippets {
                out.push_str(&format!("[{}]\n{}\n\n", snippet.source, snippet.text));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippets() -> Vec<Snippet> {
        vec![Snippet {
            text: "neural networks in the news".to_string(),
            source: "AI weekly".to_string(),
        }]
    }

    #[test]
    fn test_json_output_is_valid() {
        let out = format_snippets(&snippets(), OutputFormat::Json);
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["source"], "AI weekly");
    }

    #[test]
    fn test_cli_output_shows_provenance() {
        let out = format_snippets(&snippets(), OutputFormat::Cli);
        assert!(out.contains("[AI weekly]"));
        assert!(out.contains("neural networks in the news"));
    }
}
