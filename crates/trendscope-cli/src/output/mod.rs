//! Output formatters for pipeline results

pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use trendscope_core::PipelineResult;

/// Format a pipeline result
pub fn format_result(result: &PipelineResult, query: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_result(result),
        OutputFormat::Md => markdown::format_result(result, query),
        OutputFormat::Cli => terminal::format_result(result),
    }
}
