//! Scoring of query results against the fixed quality thresholds.

use chrono::Utc;
use tracing::{debug, warn};

use ragcheck_core::config::ValidationConfig;
use ragcheck_core::types::{QueryResult, TextChunk, ValidationResult};

use crate::report::{DetailedMetrics, OverallMetrics, PipelineStability};
use crate::stats;

/// Pure function over its inputs: never fails, degenerate data maps to
/// conservative scores (0.0 / false) instead of errors.
pub struct ResultEvaluator {
    relevance_threshold: f32,
}

impl ResultEvaluator {
    pub fn new(relevance_threshold: f32) -> Self {
        Self { relevance_threshold }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.relevance_threshold)
    }

    pub fn evaluate(&self, result: &QueryResult) -> ValidationResult {
        debug!(
            query_result_id = %result.query_id,
            chunks = result.chunks.len(),
            "evaluating query result"
        );
        ValidationResult {
            query_result_id: result.query_id.clone(),
            precision_at_k: self.precision_at_k(&result.similarity_scores),
            recall_at_k: self.recall_at_k(&result.similarity_scores),
            relevance_score: self.relevance_score(&result.similarity_scores),
            semantic_alignment: self.semantic_alignment(&result.similarity_scores),
            metadata_accuracy: self.metadata_accuracy(&result.chunks),
            evaluated_at: Utc::now(),
        }
    }

    /// Fraction of hits at or above the relevance threshold (`>=`, so a
    /// score exactly at the threshold counts as relevant).
    pub fn precision_at_k(&self, scores: &[f32]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        let relevant = scores
            .iter()
            .filter(|s| **s >= self.relevance_threshold)
            .count();
        relevant as f64 / scores.len() as f64
    }

    /// Same formula as precision@k. Without a ground-truth relevant set
    /// this is a documented approximation, not true recall.
    pub fn recall_at_k(&self, scores: &[f32]) -> f64 {
        self.precision_at_k(scores)
    }

    pub fn relevance_score(&self, scores: &[f32]) -> f64 {
        stats::mean_scores(scores)
    }

    /// Same value as `relevance_score`; kept as a separately named
    /// metric so reports stay readable.
    pub fn semantic_alignment(&self, scores: &[f32]) -> f64 {
        stats::mean_scores(scores)
    }

    /// Conjunction over all chunks: one offender flips the whole result
    /// to false. Vacuously true for an empty chunk list.
    pub fn metadata_accuracy(&self, chunks: &[TextChunk]) -> bool {
        for chunk in chunks {
            if !chunk.has_required_metadata() {
                warn!(chunk_id = %chunk.id, "chunk missing required metadata");
                return false;
            }
        }
        true
    }

    /// Aggregate metrics across completed query results. An empty slice
    /// produces the neutral report rather than an error.
    pub fn batch_metrics(&self, results: &[QueryResult]) -> OverallMetrics {
        if results.is_empty() {
            return OverallMetrics::neutral();
        }

        let mut precision = Vec::with_capacity(results.len());
        let mut recall = Vec::with_capacity(results.len());
        let mut relevance = Vec::with_capacity(results.len());
        let mut alignments = Vec::with_capacity(results.len());
        let mut times = Vec::with_capacity(results.len());
        let mut accurate = 0usize;

        for result in results {
            let validation = self.evaluate(result);
            precision.push(validation.precision_at_k);
            recall.push(validation.recall_at_k);
            relevance.push(validation.relevance_score);
            alignments.push(validation.semantic_alignment);
            times.push(result.retrieval_time_ms);
            if validation.metadata_accuracy {
                accurate += 1;
            }
        }

        OverallMetrics {
            // Every result in this slice came from a completed search.
            connection_success_rate: 1.0,
            avg_query_time_ms: stats::mean(&times),
            avg_semantic_alignment: stats::mean(&alignments),
            metadata_accuracy_rate: accurate as f64 / results.len() as f64,
            pipeline_stability: assess_stability(&times, &alignments),
            detailed_metrics: DetailedMetrics {
                precision_at_k: stats::mean(&precision),
                recall_at_k: stats::mean(&recall),
                relevance_score: stats::mean(&relevance),
            },
        }
    }
}

/// Classify stability from the coefficients of variation of retrieval
/// times and alignment scores. A zero mean makes the CV infinite, which
/// lands in `Unstable`.
pub fn assess_stability(times: &[f64], alignments: &[f64]) -> PipelineStability {
    if times.len() < 2 {
        return PipelineStability::InsufficientData;
    }

    let time_mean = stats::mean(times);
    let time_cv = if time_mean > 0.0 {
        stats::std_dev(times) / time_mean
    } else {
        f64::INFINITY
    };

    let alignment_mean = stats::mean(alignments);
    let alignment_cv = if alignment_mean > 0.0 {
        stats::std_dev(alignments) / alignment_mean
    } else {
        f64::INFINITY
    };

    if time_cv < 0.2 && alignment_cv < 0.2 {
        PipelineStability::Stable
    } else if time_cv < 0.5 && alignment_cv < 0.5 {
        PipelineStability::ModeratelyStable
    } else {
        PipelineStability::Unstable
    }
}
