use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_PATH: &str = "roster_cache.jsonl";
pub const DEFAULT_OUTPUT_PATH: &str = "participants.csv";

/// Everything one pipeline run needs, assembled from the optional TOML config
/// file with command-line flags taking precedence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Source transcript, plain text with page-continuation headers.
    pub input_path: PathBuf,
    /// Append-only JSON Lines cache; repeated runs accumulate, which is the
    /// resume mechanism. Rotate it externally for a clean run.
    pub log_path: PathBuf,
    /// Destination table, written once at the end of the run.
    pub output_path: PathBuf,
    /// Chunk length limit before secondary splitting.
    pub size_threshold: usize,
    /// Ordered secondary split markers for oversized pages. Curated per
    /// document (the strings embed newlines, e.g. "\n Haiti \n"), which is
    /// why they live in the config file rather than on the command line.
    pub delimiters: Vec<String>,
    pub ollama_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_retries: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            size_threshold: ingest::DEFAULT_SIZE_THRESHOLD,
            delimiters: Vec::new(),
            ollama_url: extract::llm::DEFAULT_BASE_URL.to_string(),
            model: extract::llm::DEFAULT_MODEL.to_string(),
            timeout_secs: extract::llm::DEFAULT_TIMEOUT_SECS,
            max_retries: 3,
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }
}
