//! Retrieval validation and evaluation engine.
//!
//! Turns raw similarity-search hits into quality signals (precision,
//! relevance, semantic alignment, metadata accuracy, stability) and
//! aggregates them across batches of queries. Collaborators are injected
//! through the `EmbeddingProvider` / `VectorIndex` traits.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod aggregator;
pub mod evaluator;
pub mod executor;
pub mod report;
pub mod retry;
pub mod stability;
mod stats;

use std::sync::Arc;

use ragcheck_core::config::ValidationConfig;
use ragcheck_core::error::Result;
use ragcheck_core::traits::{EmbeddingProvider, VectorIndex};
use ragcheck_core::types::{QueryResult, ValidationResult};

use aggregator::BatchAggregator;
use evaluator::ResultEvaluator;
use executor::QueryExecutor;
use report::{BatchReport, SemanticSearchResponse, StabilityReport};
use stability::StabilityChecker;

/// Facade over the executor, evaluator, aggregator, and stability
/// checker: the surface thin HTTP/CLI layers call into.
pub struct Validator {
    executor: QueryExecutor,
    evaluator: ResultEvaluator,
}

impl Validator {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        config: ValidationConfig,
    ) -> Self {
        let evaluator = ResultEvaluator::from_config(&config);
        let executor = QueryExecutor::new(embedder, index, config);
        Self { executor, evaluator }
    }

    pub fn execute(&self, query_text: &str, top_k: Option<usize>) -> Result<QueryResult> {
        self.executor.execute(query_text, top_k)
    }

    pub fn evaluate(&self, result: &QueryResult) -> ValidationResult {
        self.evaluator.evaluate(result)
    }

    pub fn semantic_search(
        &self,
        query_text: &str,
        top_k: Option<usize>,
    ) -> Result<SemanticSearchResponse> {
        self.executor.semantic_search(query_text, top_k)
    }

    pub fn run_batch(&self, queries: &[String], top_k: Option<usize>) -> Result<BatchReport> {
        BatchAggregator::new(&self.executor, &self.evaluator).run_batch(queries, top_k)
    }

    pub fn run_stability_check(
        &self,
        query_text: &str,
        runs: usize,
        top_k: Option<usize>,
    ) -> Result<StabilityReport> {
        StabilityChecker::new(&self.executor).run_stability_check(query_text, runs, top_k)
    }
}
