//! Terminal output formatter

use trendscope_core::PipelineResult;

pub fn format_result(result: &PipelineResult) -> String {
    let mut out = String::new();

    if !result.keywords.is_empty() {
        out.push_str("Keywords:\n");
        for phrase in &result.keywords {
            out.push_str(&format!("  {:>4} {}\n", phrase.count, phrase.phrase));
        }
        out.push('\n');
    }

    out.push_str(&result.report);
    if !result.report.ends_with('\n') {
        out.push('\n');
    }
    out
}
