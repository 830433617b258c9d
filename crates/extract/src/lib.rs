pub mod llm;
pub mod prompt;
pub mod schema;

pub use llm::OllamaClient;
pub use schema::{ChunkOutcome, ParticipantRecord};

use anyhow::Context;
use serde::Deserialize;

/// The seam to the structured-extraction collaborator.
///
/// Implementations never fail: anything that goes wrong during a call is
/// contained into `ChunkOutcome::Failed`, so a single chunk cannot abort the
/// run. Tests implement this with a deterministic stub instead of touching
/// network code.
pub trait ParticipantExtractor {
    async fn extract(&self, text: &str) -> ChunkOutcome;
}

/// Expected shape of the model's JSON payload. `participants` is required; a
/// payload without it counts as a malformed response.
#[derive(Deserialize)]
struct ExtractionPayload {
    participants: Vec<ParticipantRecord>,
}

/// Production extractor backed by a local Ollama model.
pub struct OllamaExtractor {
    client: OllamaClient,
    max_retries: usize,
}

impl OllamaExtractor {
    pub fn new(client: OllamaClient, max_retries: usize) -> Self {
        Self {
            client,
            max_retries,
        }
    }

    async fn try_extract(&self, text: &str) -> anyhow::Result<ChunkOutcome> {
        let request = prompt::build_extraction_prompt(text);
        let json = self
            .client
            .generate_json_with_retry(&request, self.max_retries)
            .await?;

        let payload: ExtractionPayload = serde_json::from_str(&json)
            .context("model returned JSON without a valid participants list")?;

        Ok(ChunkOutcome::Extracted {
            participants: payload.participants,
        })
    }
}

impl ParticipantExtractor for OllamaExtractor {
    async fn extract(&self, text: &str) -> ChunkOutcome {
        match self.try_extract(text).await {
            Ok(outcome) => outcome,
            Err(e) => ChunkOutcome::failed(format!("{e:#}")),
        }
    }
}
