use ragcheck_core::traits::{EmbedPurpose, EmbeddingProvider};
use ragcheck_embed::HashEmbedder;

#[test]
fn same_text_embeds_identically() {
    let embedder = HashEmbedder::new(256);
    let a = embedder.embed("What is ROS2?", EmbedPurpose::Query).expect("embed");
    let b = embedder.embed("What is ROS2?", EmbedPurpose::Query).expect("embed");
    assert_eq!(a, b);
}

#[test]
fn different_texts_embed_differently() {
    let embedder = HashEmbedder::new(256);
    let a = embedder.embed("gazebo worlds", EmbedPurpose::Query).expect("embed");
    let b = embedder.embed("isaac sim assets", EmbedPurpose::Query).expect("embed");
    assert_ne!(a, b);
}

#[test]
fn vectors_have_configured_dim_and_unit_norm() {
    let embedder = HashEmbedder::new(64);
    let v = embedder
        .embed("robot perception stack", EmbedPurpose::Document)
        .expect("embed");
    assert_eq!(v.len(), 64);
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-4, "expected unit norm, got {norm}");
}

#[test]
fn empty_text_is_an_embedding_error() {
    let embedder = HashEmbedder::default();
    assert!(embedder.embed("   ", EmbedPurpose::Query).is_err());
}
