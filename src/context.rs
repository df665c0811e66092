//! Per-run application context.
//!
//! One [`AppContext`] is constructed in `main` and passed down — the
//! embedding client, chat client, and vector collection live here instead
//! of in process-wide state. The collection starts empty on every run.

use crate::config::Config;
use crate::embedding::{Embedder, OllamaEmbedder};
use crate::llm::{ChatModel, OllamaChat};
use crate::store::VectorCollection;
use crate::{index, pipeline, retrieve, Result};

pub struct AppContext {
    pub config: Config,
    pub embedder: Box<dyn Embedder>,
    pub chat: Box<dyn ChatModel>,
    pub collection: VectorCollection,
}

impl AppContext {
    pub fn from_config(config: Config) -> Result<Self> {
        let embedder = Box::new(OllamaEmbedder::new(&config.ollama)?);
        let chat = Box::new(OllamaChat::new(&config.ollama)?);
        Ok(Self {
            config,
            embedder,
            chat,
            collection: VectorCollection::new("pmb-docs"),
        })
    }

    /// Answer one topic: index the configured document if it exists,
    /// retrieve context, then run the two-stage pipeline.
    pub async fn answer(&self, topic: &str) -> Result<String> {
        let doc_path = &self.config.document.path;
        if doc_path.exists() {
            let summary = index::index_document(
                self.embedder.as_ref(),
                &self.collection,
                doc_path,
                &self.config.chunking,
            )
            .await?;
            println!("index {}", doc_path.display());
            println!("  chunks written: {}", summary.chunks);
            println!("  collection size: {}", summary.collection_size);
        } else {
            eprintln!(
                "document {} not found; answering without retrieval",
                doc_path.display()
            );
        }

        let context = retrieve::retrieve_context(
            self.embedder.as_ref(),
            &self.collection,
            topic,
            self.config.retrieval.top_k,
        )
        .await?;
        if context.is_none() {
            eprintln!("no relevant context found for topic");
        }

        pipeline::run_pipeline(
            self.chat.as_ref(),
            topic,
            context.as_deref(),
            self.config.retrieval.max_context_chars,
        )
        .await
    }
}
