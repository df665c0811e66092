//! Core data types that flow through the indexing and retrieval pipeline.

/// A bounded window of the source document's text, the unit stored in and
/// retrieved from the vector collection.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Lowercase hex SHA-256 of `text`. Content-derived so re-indexing the
    /// same document upserts the same ids instead of colliding.
    pub id: String,
    /// Position of this chunk within the source document.
    pub chunk_index: usize,
    pub text: String,
}

/// A retrieval hit, scored by cosine similarity (nearest first).
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub id: String,
    pub text: String,
    pub score: f32,
}

/// Counters reported after indexing a document.
#[derive(Debug, Clone)]
pub struct IndexSummary {
    pub chunks: usize,
    pub collection_size: usize,
}
