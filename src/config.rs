//! TOML configuration for the `pmb` CLI.
//!
//! The config file is optional: when `--config` is not given and the default
//! path does not exist, built-in defaults matching the original deployment
//! are used (llama3 chat model, nomic-embed-text embeddings, 1000/100
//! chunking, `dataset.pdf`). An explicitly passed path must load cleanly.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default config path probed when `--config` is omitted.
pub const DEFAULT_CONFIG_PATH: &str = "./config/pmb.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Connection settings shared by the chat and embedding endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct OllamaConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chat_model: default_chat_model(),
            embedding_model: default_embedding_model(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}
fn default_chat_model() -> String {
    "llama3".to_string()
}
fn default_embedding_model() -> String {
    "nomic-embed-text".to_string()
}
fn default_timeout_secs() -> u64 {
    120
}
fn default_max_retries() -> u32 {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

fn default_chunk_size() -> usize {
    1000
}
fn default_chunk_overlap() -> usize {
    100
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Retrieved context longer than this is truncated (head kept) before
    /// it is folded into the analysis prompt.
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            max_context_chars: default_max_context_chars(),
        }
    }
}

fn default_top_k() -> usize {
    1
}
fn default_max_context_chars() -> usize {
    4000
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentConfig {
    /// Source document indexed at startup when the file exists.
    #[serde(default = "default_document_path")]
    pub path: PathBuf,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: default_document_path(),
        }
    }
}

fn default_document_path() -> PathBuf {
    PathBuf::from("dataset.pdf")
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;

    validate(&config)?;
    Ok(config)
}

/// Resolve the effective config: an explicit path must load, the default
/// path is probed, and absence of both falls back to built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_config(p),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                load_config(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.chunking.chunk_size == 0 {
        return Err(Error::Config("chunking.chunk_size must be > 0".into()));
    }
    if config.chunking.chunk_overlap >= config.chunking.chunk_size {
        return Err(Error::Config(
            "chunking.chunk_overlap must be smaller than chunking.chunk_size".into(),
        ));
    }
    if config.retrieval.top_k < 1 {
        return Err(Error::Config("retrieval.top_k must be >= 1".into()));
    }
    if config.retrieval.max_context_chars == 0 {
        return Err(Error::Config(
            "retrieval.max_context_chars must be > 0".into(),
        ));
    }
    if config.ollama.base_url.trim().is_empty() {
        return Err(Error::Config("ollama.base_url must not be empty".into()));
    }
    if config.ollama.chat_model.trim().is_empty() {
        return Err(Error::Config("ollama.chat_model must not be empty".into()));
    }
    if config.ollama.embedding_model.trim().is_empty() {
        return Err(Error::Config(
            "ollama.embedding_model must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_original_deployment() {
        let config = Config::default();
        assert_eq!(config.ollama.chat_model, "llama3");
        assert_eq!(config.ollama.embedding_model, "nomic-embed-text");
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.chunking.chunk_overlap, 100);
        assert_eq!(config.retrieval.top_k, 1);
        assert_eq!(config.document.path, PathBuf::from("dataset.pdf"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chunking]\nchunk_size = 500").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.chunking.chunk_size, 500);
        assert_eq!(config.chunking.chunk_overlap, 100);
        assert_eq!(config.ollama.chat_model, "llama3");
    }

    #[test]
    fn overlap_must_be_smaller_than_chunk_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chunking]\nchunk_size = 100\nchunk_overlap = 100").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_or_default(Some(Path::new("/nonexistent/pmb.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
