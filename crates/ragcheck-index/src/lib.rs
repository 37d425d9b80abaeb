//! In-memory vector index.
//!
//! Brute-force cosine ranking over stored chunks, best-first, truncated
//! to `top_k`. Deterministic by construction, which makes it the fixture
//! of choice for validation runs and tests; a remote index implements the
//! same `VectorIndex` trait out of tree.

use tracing::{debug, info};

use ragcheck_core::error::{Error, Result};
use ragcheck_core::traits::{EmbedPurpose, EmbeddingProvider, VectorIndex};
use ragcheck_core::types::{ChunkId, IndexHit, Meta};

/// One stored document chunk with its payload and embedding.
#[derive(Debug, Clone)]
pub struct StoredChunk {
    pub id: ChunkId,
    pub content: String,
    pub metadata: Meta,
    pub vector: Vec<f32>,
}

#[derive(Default)]
pub struct MemoryVectorIndex {
    entries: Vec<StoredChunk>,
}

impl MemoryVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(
        &mut self,
        id: impl Into<ChunkId>,
        content: impl Into<String>,
        metadata: Meta,
        vector: Vec<f32>,
    ) {
        self.entries.push(StoredChunk {
            id: id.into(),
            content: content.into(),
            metadata,
            vector,
        });
    }

    /// Embed and store a batch of documents with the given provider.
    pub fn index_documents(
        &mut self,
        documents: &[(String, String, Meta)],
        provider: &dyn EmbeddingProvider,
    ) -> Result<()> {
        for (id, content, metadata) in documents {
            let vector = provider.embed(content, EmbedPurpose::Document)?;
            self.insert(id.clone(), content.clone(), metadata.clone(), vector);
        }
        info!(stored = self.entries.len(), "indexed documents");
        Ok(())
    }
}

impl VectorIndex for MemoryVectorIndex {
    fn search(&self, vector: &[f32], top_k: usize) -> Result<Vec<IndexHit>> {
        if vector.is_empty() {
            return Err(Error::Index("query vector is empty".to_string()));
        }
        let mut hits: Vec<IndexHit> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.vector.len() != vector.len() {
                return Err(Error::Index(format!(
                    "dimension mismatch: query {} vs stored {}",
                    vector.len(),
                    entry.vector.len()
                )));
            }
            hits.push(IndexHit {
                id: entry.id.clone(),
                content: entry.content.clone(),
                metadata: entry.metadata.clone(),
                score: cosine_similarity(vector, &entry.vector),
            });
        }
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(top_k);
        debug!(returned = hits.len(), top_k, "vector search");
        Ok(hits)
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
