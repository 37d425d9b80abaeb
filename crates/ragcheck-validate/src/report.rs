//! Report shapes emitted by the validation API.
//!
//! Field names are the JSON contract consumed by the HTTP/CLI layers;
//! everything serializes with snake_case names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ragcheck_core::types::{ChunkId, Meta, ValidationResult};

/// Consistency classification for a set of completed queries, derived
/// from the coefficients of variation of timings and alignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStability {
    Stable,
    ModeratelyStable,
    Unstable,
    InsufficientData,
    NotApplicable,
}

impl std::fmt::Display for PipelineStability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PipelineStability::Stable => "stable",
            PipelineStability::ModeratelyStable => "moderately_stable",
            PipelineStability::Unstable => "unstable",
            PipelineStability::InsufficientData => "insufficient_data",
            PipelineStability::NotApplicable => "not_applicable",
        };
        f.write_str(s)
    }
}

/// Secondary per-metric averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedMetrics {
    pub precision_at_k: f64,
    pub recall_at_k: f64,
    pub relevance_score: f64,
}

/// Aggregate metrics across the completed queries of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallMetrics {
    pub connection_success_rate: f64,
    pub avg_query_time_ms: f64,
    pub avg_semantic_alignment: f64,
    pub metadata_accuracy_rate: f64,
    pub pipeline_stability: PipelineStability,
    pub detailed_metrics: DetailedMetrics,
}

impl OverallMetrics {
    /// Report shape for a batch where no query completed.
    pub fn neutral() -> Self {
        Self {
            connection_success_rate: 0.0,
            avg_query_time_ms: 0.0,
            avg_semantic_alignment: 0.0,
            metadata_accuracy_rate: 0.0,
            pipeline_stability: PipelineStability::NotApplicable,
            detailed_metrics: DetailedMetrics {
                precision_at_k: 0.0,
                recall_at_k: 0.0,
                relevance_score: 0.0,
            },
        }
    }
}

/// One completed query inside a batch report, input order preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerQueryResult {
    pub query_id: String,
    pub query: String,
    pub validation_result: ValidationResult,
    pub retrieved_count: usize,
    pub retrieval_time_ms: f64,
}

/// Pass/fail rollup against the fixed quality thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub metadata_accuracy_pass: bool,
    pub semantic_alignment_pass: bool,
    pub query_time_pass: bool,
    pub pipeline_stability: PipelineStability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub batch_id: String,
    pub generated_at: DateTime<Utc>,
    pub total_queries: usize,
    pub completed_queries: usize,
    pub overall_metrics: OverallMetrics,
    pub per_query_results: Vec<PerQueryResult>,
    pub validation_summary: ValidationSummary,
    pub total_execution_time_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityReport {
    pub query: String,
    pub runs: usize,
    pub consistent_results: bool,
    pub avg_retrieval_time_ms: f64,
    pub time_std_dev: f64,
    pub time_coefficient_of_variation: f64,
    pub retrieval_times: Vec<f64>,
}

/// A chunk paired with its similarity score, for API consumers that want
/// the raw retrieval rather than quality metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub id: ChunkId,
    pub content: String,
    pub metadata: Meta,
    pub similarity_score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticSearchResponse {
    pub query_id: String,
    pub original_query: String,
    pub retrieved_chunks: Vec<ScoredChunk>,
    pub retrieval_time_ms: f64,
    pub top_k: usize,
}
