//! Generate command: run the full pipeline

use crate::app::{GenerateArgs, OutputFormat};
use crate::output::format_result;
use anyhow::Result;
use trendscope_core::{build_pipeline, Config};

pub async fn run(args: GenerateArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let query = args.query.join(" ");
    let model = args.model.unwrap_or_else(|| config.llm.model.clone());

    let pipeline = build_pipeline(config)?;
    let result = pipeline.run(&query, &model).await;

    if let Some(ref error) = result.error {
        eprintln!("Pipeline fault contained: {}", error);
    }

    print!("{}", format_result(&result, &query, format));
    Ok(())
}
