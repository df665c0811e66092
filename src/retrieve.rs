//! Semantic retrieval over the in-memory collection.
//!
//! Embeds the topic and asks the collection for the nearest chunks. An empty
//! collection or an empty result set is reported as `Ok(None)` — the
//! explicit "no relevant context" signal — never as an error, and without
//! issuing an embedding call when the collection has nothing to rank.

use crate::embedding::Embedder;
use crate::store::VectorCollection;
use crate::Result;

/// Fetch up to `top_k` chunk texts relevant to `topic`, nearest first,
/// joined with blank lines. `None` means "answer without retrieval".
pub async fn retrieve_context(
    embedder: &dyn Embedder,
    collection: &VectorCollection,
    topic: &str,
    top_k: usize,
) -> Result<Option<String>> {
    if collection.is_empty() {
        return Ok(None);
    }

    let query_vec = embedder.embed(topic).await?;
    let hits = collection.query(&query_vec, top_k);
    if hits.is_empty() {
        return Ok(None);
    }

    let joined = hits
        .into_iter()
        .map(|h| h.text)
        .collect::<Vec<_>>()
        .join("\n\n");
    Ok(Some(joined))
}
