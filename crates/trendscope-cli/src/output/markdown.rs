//! Markdown output formatter

use trendscope_core::PipelineResult;

pub fn format_result(result: &PipelineResult, query: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Research proposal: {}\n\n", query));
    out.push_str(&format!(
        "_Generated {}_\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    if !result.keywords.is_empty() {
        out.push_str("## Trending keywords\n\n");
        for phrase in &result.keywords {
            out.push_str(&format!("- **{}** ({})\n", phrase.phrase, phrase.count));
        }
        out.push('\n');
    }

    out.push_str(&result.report);
    if !result.report.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendscope_core::RankedPhrase;

    #[test]
    fn test_keywords_section_precedes_report() {
        let result = PipelineResult {
            error: None,
            keywords: vec![RankedPhrase::new("neural networks", 2)],
            report: "# Directions\n\ntext".to_string(),
        };
        let out = format_result(&result, "AI ethics");

        assert!(out.starts_with("# Research proposal: AI ethics"));
        let keywords_at = out.find("## Trending keywords").unwrap();
        let report_at = out.find("# Directions").unwrap();
        assert!(keywords_at < report_at);
    }

    #[test]
    fn test_no_keywords_section_when_empty() {
        let result = PipelineResult {
            error: None,
            keywords: Vec::new(),
            report: "report".to_string(),
        };
        assert!(!format_result(&result, "q").contains("Trending keywords"));
    }
}
