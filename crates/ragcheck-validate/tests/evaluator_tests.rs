use std::collections::HashMap;

use ragcheck_core::types::{QueryResult, TextChunk};
use ragcheck_validate::evaluator::{assess_stability, ResultEvaluator};
use ragcheck_validate::report::PipelineStability;

fn full_metadata() -> HashMap<String, String> {
    HashMap::from([
        ("url".to_string(), "https://x".to_string()),
        ("page_title".to_string(), "ROS2".to_string()),
        ("section".to_string(), "Intro".to_string()),
    ])
}

fn chunk(id: &str) -> TextChunk {
    TextChunk::new(id, "content", full_metadata())
}

fn result_with(scores: Vec<f32>, time_ms: f64) -> QueryResult {
    let chunks = (0..scores.len()).map(|i| chunk(&format!("c{i}"))).collect();
    QueryResult::new("query-test", chunks, scores, time_ms, 10).expect("aligned result")
}

#[test]
fn precision_counts_scores_at_or_above_threshold() {
    let evaluator = ResultEvaluator::new(0.7);
    // 0.7 itself is relevant: comparisons are >=, not >.
    let p = evaluator.precision_at_k(&[0.95, 0.7, 0.5, 0.2]);
    assert!((p - 0.5).abs() < 1e-12);
}

#[test]
fn precision_of_empty_scores_is_zero() {
    let evaluator = ResultEvaluator::new(0.7);
    assert_eq!(evaluator.precision_at_k(&[]), 0.0);
}

#[test]
fn precision_holds_for_any_threshold() {
    let scores = [0.1, 0.3, 0.5, 0.7, 0.9];
    for threshold in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let evaluator = ResultEvaluator::new(threshold);
        let expected =
            scores.iter().filter(|s| **s >= threshold).count() as f64 / scores.len() as f64;
        assert_eq!(evaluator.precision_at_k(&scores), expected);
    }
}

#[test]
fn recall_mirrors_precision_without_ground_truth() {
    let evaluator = ResultEvaluator::new(0.7);
    let scores = [0.9, 0.6, 0.8];
    assert_eq!(evaluator.recall_at_k(&scores), evaluator.precision_at_k(&scores));
}

#[test]
fn relevance_is_mean_of_scores() {
    let evaluator = ResultEvaluator::new(0.7);
    let r = evaluator.relevance_score(&[0.8, 0.6, 0.7]);
    assert!((r - 0.7).abs() < 1e-6);
    assert_eq!(evaluator.relevance_score(&[]), 0.0);
}

#[test]
fn semantic_alignment_matches_relevance() {
    let evaluator = ResultEvaluator::new(0.7);
    let scores = [0.42, 0.88];
    assert_eq!(
        evaluator.semantic_alignment(&scores),
        evaluator.relevance_score(&scores)
    );
}

#[test]
fn single_offending_chunk_flips_metadata_accuracy() {
    let evaluator = ResultEvaluator::new(0.7);
    let mut bad_meta = full_metadata();
    bad_meta.remove("section");
    let chunks = vec![
        chunk("good1"),
        TextChunk::new("bad", "content", bad_meta),
        chunk("good2"),
    ];
    assert!(!evaluator.metadata_accuracy(&chunks));
}

#[test]
fn metadata_accuracy_is_vacuously_true_for_no_chunks() {
    let evaluator = ResultEvaluator::new(0.7);
    assert!(evaluator.metadata_accuracy(&[]));
}

#[test]
fn ros2_single_hit_scenario() {
    let evaluator = ResultEvaluator::new(0.7);
    let result = QueryResult::new(
        "query-ros2",
        vec![TextChunk::new("chunk1", "ROS2 is a framework", full_metadata())],
        vec![0.95],
        12.0,
        1,
    )
    .expect("result");
    let validation = evaluator.evaluate(&result);
    assert!(validation.metadata_accuracy);
    assert!((validation.relevance_score - 0.95).abs() < 1e-6);
    assert_eq!(validation.precision_at_k, 1.0);
}

#[test]
fn missing_section_scenario() {
    let evaluator = ResultEvaluator::new(0.7);
    let mut meta = full_metadata();
    meta.remove("section");
    let result = QueryResult::new(
        "query-ros2",
        vec![TextChunk::new("chunk1", "ROS2 is a framework", meta)],
        vec![0.95],
        12.0,
        1,
    )
    .expect("result");
    assert!(!evaluator.evaluate(&result).metadata_accuracy);
}

#[test]
fn evaluation_is_idempotent() {
    let evaluator = ResultEvaluator::new(0.7);
    let result = result_with(vec![0.9, 0.4, 0.7], 33.0);
    let a = evaluator.evaluate(&result);
    let b = evaluator.evaluate(&result);
    assert_eq!(a.precision_at_k, b.precision_at_k);
    assert_eq!(a.recall_at_k, b.recall_at_k);
    assert_eq!(a.relevance_score, b.relevance_score);
    assert_eq!(a.semantic_alignment, b.semantic_alignment);
    assert_eq!(a.metadata_accuracy, b.metadata_accuracy);
}

#[test]
fn batch_metrics_average_retrieval_times() {
    let evaluator = ResultEvaluator::new(0.7);
    let results = vec![
        result_with(vec![0.9], 100.0),
        result_with(vec![0.9], 150.0),
    ];
    let metrics = evaluator.batch_metrics(&results);
    assert_eq!(metrics.avg_query_time_ms, 125.0);
    assert_eq!(metrics.metadata_accuracy_rate, 1.0);
    assert_eq!(metrics.connection_success_rate, 1.0);
}

#[test]
fn batch_metrics_of_no_results_are_neutral() {
    let evaluator = ResultEvaluator::new(0.7);
    let metrics = evaluator.batch_metrics(&[]);
    assert_eq!(metrics.avg_query_time_ms, 0.0);
    assert_eq!(metrics.connection_success_rate, 0.0);
    assert_eq!(metrics.pipeline_stability, PipelineStability::NotApplicable);
}

#[test]
fn stability_needs_two_samples() {
    assert_eq!(
        assess_stability(&[100.0], &[0.9]),
        PipelineStability::InsufficientData
    );
}

#[test]
fn zero_variance_is_stable() {
    let times = [100.0; 5];
    let alignments = [0.9; 5];
    assert_eq!(
        assess_stability(&times, &alignments),
        PipelineStability::Stable
    );
}

#[test]
fn moderate_variance_is_moderately_stable() {
    // time CV ~0.28, alignment CV 0 -> both below 0.5, not both below 0.2
    let times = [100.0, 150.0];
    let alignments = [0.9, 0.9];
    assert_eq!(
        assess_stability(&times, &alignments),
        PipelineStability::ModeratelyStable
    );
}

#[test]
fn zero_mean_alignment_is_unstable() {
    // mean of 0 makes the CV infinite
    let times = [100.0, 100.0];
    let alignments = [0.0, 0.0];
    assert_eq!(
        assess_stability(&times, &alignments),
        PipelineStability::Unstable
    );
}

#[test]
fn high_time_variance_is_unstable() {
    let times = [10.0, 500.0, 12.0];
    let alignments = [0.9, 0.9, 0.9];
    assert_eq!(
        assess_stability(&times, &alignments),
        PipelineStability::Unstable
    );
}
