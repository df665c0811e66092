//! Embedding provider abstraction and the Ollama implementation.
//!
//! Defines the [`Embedder`] trait and [`OllamaEmbedder`], which calls the
//! local Ollama embeddings API (`POST /api/embeddings`) with retry and
//! backoff. Every call recomputes — there is no cache.
//!
//! Also provides [`cosine_similarity`] for ranking stored vectors against
//! a query vector.

use async_trait::async_trait;

use crate::config::OllamaConfig;
use crate::remote;
use crate::{Error, Result};

/// Turns a text string into a fixed-length vector. Dimensionality is
/// determined by the backing model.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Returns the model identifier (e.g. `"nomic-embed-text"`).
    fn model_name(&self) -> &str;

    /// Embed one text. Empty or whitespace-only input is an error.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Embedding provider backed by a local Ollama instance.
pub struct OllamaEmbedder {
    client: reqwest::Client,
    base_url: String,
    model: String,
    max_retries: u32,
}

impl OllamaEmbedder {
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Embedding(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.embedding_model.clone(),
            max_retries: config.max_retries,
        })
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(Error::Embedding("cannot embed empty text".into()));
        }

        let url = remote::endpoint(&self.base_url, "api/embeddings");
        let body = serde_json::json!({
            "model": self.model,
            "prompt": text,
        });

        let json = remote::post_json_with_retry(&self.client, &url, &body, self.max_retries)
            .await
            .map_err(Error::Embedding)?;

        parse_embedding(&json)
    }
}

/// Parse the Ollama embeddings response: `{"embedding": [f64, ...]}`.
fn parse_embedding(json: &serde_json::Value) -> Result<Vec<f32>> {
    let values = json
        .get("embedding")
        .and_then(|e| e.as_array())
        .ok_or_else(|| Error::Embedding("response missing embedding array".into()))?;

    if values.is_empty() {
        return Err(Error::Embedding("response contained an empty embedding".into()));
    }

    Ok(values
        .iter()
        .map(|v| v.as_f64().unwrap_or(0.0) as f32)
        .collect())
}

/// Compute cosine similarity between two embedding vectors.
///
/// Returns a value in `[-1.0, 1.0]`; `0.0` for empty vectors or vectors of
/// different lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < f32::EPSILON {
        return 0.0;
    }

    dot / denom
}
