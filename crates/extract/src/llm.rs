use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    timeout: Duration,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    format: String, // "json" for structured output
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String, timeout: Duration) -> Self {
        Self {
            base_url,
            model,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// One bounded-wait generation call. Temperature 0 requests deterministic
    /// output, so repeated calls on the same chunk should be stable (the
    /// model does not guarantee byte-identical responses).
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let request = OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            format: "json".to_string(),
            options: OllamaOptions { temperature: 0.0 },
        };

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .context("failed to send request to Ollama")?;

        if !response.status().is_success() {
            anyhow::bail!("Ollama request failed: {}", response.status());
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .context("failed to parse Ollama response")?;

        Ok(strip_code_fences(&ollama_response.response).to_string())
    }

    /// Generate with retry for invalid JSON, feeding the broken payload back
    /// through a correction prompt between attempts.
    pub async fn generate_json_with_retry(
        &self,
        prompt: &str,
        max_retries: usize,
    ) -> Result<String> {
        for attempt in 0..max_retries {
            let response = self.generate(prompt).await?;

            if serde_json::from_str::<serde_json::Value>(&response).is_ok() {
                return Ok(response);
            }

            if attempt < max_retries - 1 {
                let retry_prompt = crate::prompt::build_retry_prompt(&response);
                let corrected = self.generate(&retry_prompt).await?;
                if serde_json::from_str::<serde_json::Value>(&corrected).is_ok() {
                    return Ok(corrected);
                }
            }
        }

        anyhow::bail!("failed to get valid JSON after {} attempts", max_retries)
    }
}

/// Models sometimes wrap the payload in a markdown code block even when asked
/// not to; unwrap it before parsing.
fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_json_passes_through() {
        assert_eq!(strip_code_fences(r#"{"participants": []}"#), r#"{"participants": []}"#);
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let fenced = "```json\n{\"participants\": []}\n```";
        assert_eq!(strip_code_fences(fenced), r#"{"participants": []}"#);

        let fenced = "```\n{\"participants\": []}\n```";
        assert_eq!(strip_code_fences(fenced), r#"{"participants": []}"#);
    }
}
