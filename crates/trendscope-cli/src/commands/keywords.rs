//! Keywords command: collector + extractor stages

use crate::app::{OutputFormat, QueryArgs};
use anyhow::Result;
use trendscope_core::{Collector, Config, Extractor, RankedPhrase, SnippetSource};

pub async fn run(args: QueryArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let query = args.query.join(" ");
    let collector = Collector::new(config.search.clone())?;
    let extractor = Extractor::new();

    let snippets = collector.fetch(&query).await;
    let ranked = extractor.extract(&snippets);

    print!("{}", format_keywords(&ranked, format));
    Ok(())
}

fn format_keywords(ranked: &[RankedPhrase], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(ranked).unwrap_or_else(|_| "[]".to_string()) + "\n"
        }
        OutputFormat::Md => {
            let mut out = String::new();
            for phrase in ranked {
                out.push_str(&format!("- **{}** ({})\n", phrase.phrase, phrase.count));
            }
            out
        }
        OutputFormat::Cli => {
            let mut out = String::new();
            for phrase in ranked {
                out.push_str(&format!("{:>4} {}\n", phrase.count, phrase.phrase));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_is_pair_shaped() {
        let ranked = vec![RankedPhrase::new("neural networks", 2)];
        let out = format_keywords(&ranked, OutputFormat::Json);
        let parsed: Vec<(String, u32)> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![("neural networks".to_string(), 2)]);
    }

    #[test]
    fn test_cli_output_lists_count_then_phrase() {
        let ranked = vec![RankedPhrase::new("neural networks", 2)];
        let out = format_keywords(&ranked, OutputFormat::Cli);
        assert!(out.contains("2 neural networks"));
    }
}
