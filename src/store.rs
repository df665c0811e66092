//! In-memory vector collection.
//!
//! Stores `(id, embedding, text)` entries behind `std::sync::RwLock` and
//! answers nearest-neighbor queries by brute-force cosine similarity over
//! all stored vectors. Process-local and rebuilt from empty on every run;
//! there is no persistence.
//!
//! `upsert` replaces any entry with the same id, so re-indexing a document
//! whose chunk ids are content hashes is idempotent.

use std::sync::RwLock;

use crate::embedding::cosine_similarity;
use crate::models::ScoredChunk;

struct StoredEntry {
    id: String,
    vector: Vec<f32>,
    text: String,
}

pub struct VectorCollection {
    name: String,
    entries: RwLock<Vec<StoredEntry>>,
}

impl VectorCollection {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an entry, replacing any existing entry with the same id.
    pub fn upsert(&self, id: &str, vector: Vec<f32>, text: &str) {
        let mut entries = self.entries.write().unwrap();
        entries.retain(|e| e.id != id);
        entries.push(StoredEntry {
            id: id.to_string(),
            vector,
            text: text.to_string(),
        });
    }

    /// Return up to `k` entries ranked by cosine similarity to `query_vec`,
    /// nearest first. An empty collection yields an empty result.
    pub fn query(&self, query_vec: &[f32], k: usize) -> Vec<ScoredChunk> {
        let entries = self.entries.read().unwrap();
        let mut hits: Vec<ScoredChunk> = entries
            .iter()
            .map(|e| ScoredChunk {
                id: e.id.clone(),
                text: e.text.clone(),
                score: cosine_similarity(query_vec, &e.vector),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);
        hits
    }
}
