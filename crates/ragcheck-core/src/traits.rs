use crate::error::Result;
use crate::types::IndexHit;

/// What an embedding request is for. Providers that distinguish query
/// and document encodings (e.g. asymmetric models) key off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedPurpose {
    Query,
    Document,
}

/// text -> fixed-length vector. Implementations must bound each call by
/// the configured request timeout and report timeouts as `Embedding`
/// errors so the retry policy can classify them.
pub trait EmbeddingProvider: Send + Sync {
    fn dim(&self) -> usize;
    fn embed(&self, text: &str, purpose: EmbedPurpose) -> Result<Vec<f32>>;
}

/// vector + top-k -> ranked hits with payload. Hit order is the index's
/// own similarity ranking, best-first; callers must not re-sort.
pub trait VectorIndex: Send + Sync {
    fn search(&self, vector: &[f32], top_k: usize) -> Result<Vec<IndexHit>>;
}
