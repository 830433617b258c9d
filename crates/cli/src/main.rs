use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use cli::RunConfig;
use extract::{OllamaClient, OllamaExtractor};

/// Convert a page-paginated conference participant list into a structured
/// table of participants.
#[derive(Parser)]
#[command(name = "roster", version)]
struct Args {
    /// Source transcript (plain text with "(continued)" page headers)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Append-only JSON Lines cache; re-running resumes from its tail
    #[arg(long)]
    log: Option<PathBuf>,

    /// Destination CSV table
    #[arg(long)]
    output: Option<PathBuf>,

    /// Chunk length limit before secondary splitting
    #[arg(long)]
    threshold: Option<usize>,

    /// TOML config file; also the only way to pass split delimiters, which
    /// embed newlines
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ollama endpoint
    #[arg(long, env = "ROSTER_OLLAMA_URL")]
    ollama_url: Option<String>,

    /// Model to extract with
    #[arg(long, env = "ROSTER_MODEL")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(log) = args.log {
        config.log_path = log;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(threshold) = args.threshold {
        config.size_threshold = threshold;
    }
    if let Some(ollama_url) = args.ollama_url {
        config.ollama_url = ollama_url;
    }
    if let Some(model) = args.model {
        config.model = model;
    }
    if config.input_path.as_os_str().is_empty() {
        anyhow::bail!("no input file given (use --input or input_path in the config file)");
    }

    let client = OllamaClient::new(
        config.ollama_url.clone(),
        config.model.clone(),
        Duration::from_secs(config.timeout_secs),
    );
    let extractor = OllamaExtractor::new(client, config.max_retries);

    let summary = cli::run(&config, &extractor).await?;
    summary.report();

    Ok(())
}
