use std::collections::HashMap;

use ragcheck_core::traits::{EmbedPurpose, EmbeddingProvider, VectorIndex};
use ragcheck_embed::HashEmbedder;
use ragcheck_index::{cosine_similarity, MemoryVectorIndex};

fn meta(section: &str) -> HashMap<String, String> {
    HashMap::from([
        ("url".to_string(), "https://docs.example/ros2".to_string()),
        ("page_title".to_string(), "ROS2".to_string()),
        ("section".to_string(), section.to_string()),
    ])
}

#[test]
fn search_ranks_by_cosine_descending() {
    let mut index = MemoryVectorIndex::new();
    index.insert("far", "far", meta("a"), vec![0.0, 1.0, 0.0]);
    index.insert("near", "near", meta("b"), vec![1.0, 0.0, 0.0]);
    index.insert("mid", "mid", meta("c"), vec![1.0, 1.0, 0.0]);

    let hits = index.search(&[1.0, 0.0, 0.0], 3).expect("search");
    let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "mid", "far"]);
    assert!(hits[0].score >= hits[1].score && hits[1].score >= hits[2].score);
}

#[test]
fn search_truncates_to_top_k() {
    let mut index = MemoryVectorIndex::new();
    for i in 0..10 {
        index.insert(format!("c{i}"), "content", meta("s"), vec![1.0, i as f32]);
    }
    let hits = index.search(&[1.0, 0.0], 3).expect("search");
    assert_eq!(hits.len(), 3);
}

#[test]
fn search_rejects_dimension_mismatch() {
    let mut index = MemoryVectorIndex::new();
    index.insert("a", "content", meta("s"), vec![1.0, 0.0, 0.0]);
    assert!(index.search(&[1.0, 0.0], 1).is_err());
}

#[test]
fn hits_carry_content_and_metadata_payload() {
    let mut index = MemoryVectorIndex::new();
    index.insert("chunk1", "ROS2 is a framework", meta("Intro"), vec![1.0, 0.0]);
    let hits = index.search(&[1.0, 0.0], 1).expect("search");
    assert_eq!(hits[0].content, "ROS2 is a framework");
    assert_eq!(hits[0].metadata.get("section").map(String::as_str), Some("Intro"));
}

#[test]
fn index_documents_round_trips_through_embedder() {
    let embedder = HashEmbedder::new(128);
    let docs = vec![
        ("d1".to_string(), "gazebo physics engines".to_string(), meta("Gazebo")),
        ("d2".to_string(), "isaac sim usd assets".to_string(), meta("Isaac")),
    ];
    let mut index = MemoryVectorIndex::new();
    index.index_documents(&docs, &embedder).expect("index");
    assert_eq!(index.len(), 2);

    let query = embedder
        .embed("gazebo physics engines", EmbedPurpose::Query)
        .expect("embed");
    let hits = index.search(&query, 1).expect("search");
    assert_eq!(hits[0].id, "d1");
}

#[test]
fn cosine_of_zero_vector_is_zero() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
}
