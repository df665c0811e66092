//! Document indexing pipeline.
//!
//! Coordinates the full flow for one document: load → chunk → embed →
//! upsert into the vector collection. Chunk ids are content hashes, so
//! re-running over the same document replaces entries instead of piling up
//! duplicates. Progress is emitted on stderr so stdout remains parseable.

use std::path::Path;

use crate::chunk::chunk_text;
use crate::config::ChunkingConfig;
use crate::embedding::Embedder;
use crate::extract;
use crate::models::IndexSummary;
use crate::store::VectorCollection;
use crate::{Error, Result};

pub async fn index_document(
    embedder: &dyn Embedder,
    collection: &VectorCollection,
    path: &Path,
    chunking: &ChunkingConfig,
) -> Result<IndexSummary> {
    let body = extract::load_document(path)?;
    let chunks = chunk_text(&body, chunking.chunk_size, chunking.chunk_overlap);
    if chunks.is_empty() {
        return Err(Error::DocumentLoad {
            path: path.display().to_string(),
            reason: "document produced no text".to_string(),
        });
    }

    let total = chunks.len();
    for (n, chunk) in chunks.iter().enumerate() {
        let vector = embedder.embed(&chunk.text).await?;
        collection.upsert(&chunk.id, vector, &chunk.text);
        eprintln!(
            "index {}  embedding  {} / {} chunks",
            path.display(),
            n + 1,
            total
        );
    }

    Ok(IndexSummary {
        chunks: total,
        collection_size: collection.len(),
    })
}
