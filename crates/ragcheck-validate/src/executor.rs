//! Query execution: embed, search, materialize a typed result.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use ragcheck_core::config::ValidationConfig;
use ragcheck_core::error::{Error, Result};
use ragcheck_core::traits::{EmbedPurpose, EmbeddingProvider, VectorIndex};
use ragcheck_core::types::{Query, QueryResult, TextChunk};

use crate::report::{ScoredChunk, SemanticSearchResponse};
use crate::retry::RetryPolicy;

/// Orchestrates one query against the injected collaborators.
///
/// Both the embedding and the search call go through the retry policy;
/// hit order is the index's own ranking and is never re-sorted here.
pub struct QueryExecutor {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    config: ValidationConfig,
    retry: RetryPolicy,
}

impl QueryExecutor {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        config: ValidationConfig,
    ) -> Self {
        let retry = RetryPolicy::from_config(&config);
        Self { embedder, index, config, retry }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Execute a single validation query. `top_k` falls back to the
    /// configured value when not given.
    pub fn execute(&self, query_text: &str, top_k: Option<usize>) -> Result<QueryResult> {
        if query_text.trim().is_empty() {
            return Err(Error::InvalidInput("query text is required".to_string()));
        }
        let top_k = top_k.unwrap_or(self.config.top_k);
        let query = Query::new(query_text);
        info!(query_id = %query.id, category = ?query.category, top_k, "executing query");

        let start = Instant::now();

        debug!(query_id = %query.id, "generating query embedding");
        let embedding = self
            .retry
            .run(|| self.embedder.embed(query_text, EmbedPurpose::Query))?;

        debug!(query_id = %query.id, "searching vector index");
        let mut hits = self.retry.run(|| self.index.search(&embedding, top_k))?;
        // The index contract caps hits at top_k; enforce it anyway so the
        // result invariant holds even against a misbehaving backend.
        hits.truncate(top_k);

        let mut chunks = Vec::with_capacity(hits.len());
        let mut scores = Vec::with_capacity(hits.len());
        for hit in hits {
            scores.push(hit.score);
            chunks.push(TextChunk::new(hit.id, hit.content, hit.metadata));
        }

        let retrieval_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        info!(
            query_id = %query.id,
            retrieved = chunks.len(),
            elapsed_ms = retrieval_time_ms,
            "query completed"
        );

        QueryResult::new(query.id, chunks, scores, retrieval_time_ms, top_k)
    }

    /// Search-shaped view of `execute`: each chunk paired with its score.
    pub fn semantic_search(
        &self,
        query_text: &str,
        top_k: Option<usize>,
    ) -> Result<SemanticSearchResponse> {
        let result = self.execute(query_text, top_k)?;
        let retrieved_chunks = result
            .chunks
            .iter()
            .zip(result.similarity_scores.iter())
            .map(|(chunk, score)| ScoredChunk {
                id: chunk.id.clone(),
                content: chunk.content.clone(),
                metadata: chunk.metadata.clone(),
                similarity_score: *score,
            })
            .collect();
        Ok(SemanticSearchResponse {
            query_id: result.query_id,
            original_query: query_text.to_string(),
            retrieved_chunks,
            retrieval_time_ms: result.retrieval_time_ms,
            top_k: result.top_k,
        })
    }
}
