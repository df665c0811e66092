//! Chat model boundary.
//!
//! The pipeline talks to the LLM through [`ChatModel`]: one system prompt,
//! one instruction, one free-text reply. [`OllamaChat`] implements it
//! against the local Ollama generate API (`POST /api/generate`) with the
//! same bounded retry/backoff as the embedder. The pipeline layer itself
//! adds no timeout — the HTTP client's request timeout is the only bound.

use async_trait::async_trait;

use crate::config::OllamaConfig;
use crate::remote;
use crate::{Error, Result};

#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the model identifier (e.g. `"llama3"`).
    fn model_name(&self) -> &str;

    /// Run one completion: `system` conditions the role, `prompt` carries
    /// the task instruction. Returns the model's free-text reply.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String>;
}

/// Chat model backed by a local Ollama instance.
pub struct OllamaChat {
    client: reqwest::Client,
    base_url: String,
    model: String,
    max_retries: u32,
}

impl OllamaChat {
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Model(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.chat_model.clone(),
            max_retries: config.max_retries,
        })
    }
}

#[async_trait]
impl ChatModel for OllamaChat {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
        let url = remote::endpoint(&self.base_url, "api/generate");
        let body = serde_json::json!({
            "model": self.model,
            "system": system,
            "prompt": prompt,
            "stream": false,
        });

        let json = remote::post_json_with_retry(&self.client, &url, &body, self.max_retries)
            .await
            .map_err(Error::Model)?;

        parse_response(&json)
    }
}

/// Parse the Ollama generate response: `{"response": "..."}`.
fn parse_response(json: &serde_json::Value) -> Result<String> {
    let text = json
        .get("response")
        .and_then(|r| r.as_str())
        .ok_or_else(|| Error::Model("response missing text field".into()))?;

    if text.trim().is_empty() {
        return Err(Error::Model("model returned an empty response".into()));
    }

    Ok(text.to_string())
}
