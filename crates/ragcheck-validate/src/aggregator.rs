//! Batch execution and aggregation.

use std::time::Instant;

use chrono::Utc;
use tracing::{error, info};

use ragcheck_core::error::{Error, Result};
use ragcheck_core::types::{short_id, QueryResult};

use crate::evaluator::ResultEvaluator;
use crate::executor::QueryExecutor;
use crate::report::{BatchReport, PerQueryResult, ValidationSummary};

/// Runs a batch of queries and rolls the per-query scores up into one
/// report. A failing query is logged and skipped; the batch continues.
pub struct BatchAggregator<'a> {
    executor: &'a QueryExecutor,
    evaluator: &'a ResultEvaluator,
}

impl<'a> BatchAggregator<'a> {
    pub fn new(executor: &'a QueryExecutor, evaluator: &'a ResultEvaluator) -> Self {
        Self { executor, evaluator }
    }

    pub fn run_batch(&self, queries: &[String], top_k: Option<usize>) -> Result<BatchReport> {
        if queries.is_empty() {
            return Err(Error::InvalidInput(
                "at least one query is required".to_string(),
            ));
        }

        let start = Instant::now();
        let batch_id = short_id("batch");
        info!(batch_id = %batch_id, total = queries.len(), "running batch validation");

        let mut texts: Vec<String> = Vec::with_capacity(queries.len());
        let mut results: Vec<QueryResult> = Vec::with_capacity(queries.len());
        for query_text in queries {
            match self.executor.execute(query_text, top_k) {
                Ok(result) => {
                    texts.push(query_text.clone());
                    results.push(result);
                }
                Err(e) => {
                    error!(query = %query_text, error = %e, "skipping failed query");
                }
            }
        }

        let overall_metrics = self.evaluator.batch_metrics(&results);

        let per_query_results: Vec<PerQueryResult> = texts
            .iter()
            .zip(results.iter())
            .map(|(text, result)| PerQueryResult {
                query_id: result.query_id.clone(),
                query: text.clone(),
                validation_result: self.evaluator.evaluate(result),
                retrieved_count: result.chunks.len(),
                retrieval_time_ms: result.retrieval_time_ms,
            })
            .collect();

        let validation_summary = ValidationSummary {
            metadata_accuracy_pass: overall_metrics.metadata_accuracy_rate >= 1.0,
            semantic_alignment_pass: overall_metrics.avg_semantic_alignment >= 0.8,
            query_time_pass: overall_metrics.avg_query_time_ms <= 2000.0,
            pipeline_stability: overall_metrics.pipeline_stability,
        };

        let report = BatchReport {
            batch_id,
            generated_at: Utc::now(),
            total_queries: queries.len(),
            completed_queries: results.len(),
            overall_metrics,
            per_query_results,
            validation_summary,
            total_execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        info!(
            batch_id = %report.batch_id,
            completed = report.completed_queries,
            total = report.total_queries,
            stability = %report.validation_summary.pipeline_stability,
            "batch validation complete"
        );
        Ok(report)
    }
}
