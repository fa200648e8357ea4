//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "trendscope")]
#[command(
    author,
    version,
    about = "Turn a research topic into an LLM-authored research proposal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline and print the report
    Generate(GenerateArgs),

    /// Collect news snippets for a topic (collector stage only)
    Fetch(QueryArgs),

    /// Extract ranked keywords for a topic (collector + extractor)
    Keywords(QueryArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Research topic
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Model identifier passed to the LLM service (default from config)
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Research topic
    #[arg(required = true)]
    pub query: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Cli,
    /// Request-boundary JSON
    Json,
    /// Markdown document
    Md,
}
