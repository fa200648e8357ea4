//! Trendscope CLI
//!
//! News collection, keyword extraction, and LLM report synthesis.

use anyhow::Result;
use clap::Parser;
use trendscope_core::{error::exit_codes, Config, TrendscopeError};

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<TrendscopeError>()
            .map(TrendscopeError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load config (use TRENDSCOPE_CONFIG env var if set, otherwise the default path)
    let config = match std::env::var("TRENDSCOPE_CONFIG") {
        Ok(path) => Config::load_from(std::path::Path::new(&path))?,
        Err(_) => Config::load()?,
    };

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &config, cli.format).await,
        Commands::Fetch(args) => commands::fetch::run(args, &config, cli.format).await,
        Commands::Keywords(args) => commands::keywords::run(args, &config, cli.format).await,
    }
}
