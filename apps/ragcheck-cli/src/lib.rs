//! Shared wiring for the ragcheck bins: tracing setup, the bundled demo
//! corpus, and validator construction against the in-memory index.

use std::sync::Arc;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use ragcheck_core::config::ValidationConfig;
use ragcheck_core::traits::{EmbedPurpose, EmbeddingProvider};
use ragcheck_core::types::Meta;
use ragcheck_embed::HashEmbedder;
use ragcheck_index::MemoryVectorIndex;
use ragcheck_validate::Validator;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn meta(url: &str, page_title: &str, section: &str) -> Meta {
    Meta::from([
        ("url".to_string(), url.to_string()),
        ("page_title".to_string(), page_title.to_string()),
        ("section".to_string(), section.to_string()),
    ])
}

/// Small built-in robotics corpus so the bins work without any external
/// index. Every chunk carries the full required metadata set.
pub fn demo_documents() -> Vec<(String, String, Meta)> {
    vec![
        (
            "ros2-overview".to_string(),
            "ROS2 is a framework for building robot software as a graph of \
             nodes that exchange messages over topics and services."
                .to_string(),
            meta("https://docs.example/ros2/overview", "ROS2", "Overview"),
        ),
        (
            "ros2-packages".to_string(),
            "A ROS2 package bundles nodes, launch files, and parameters; \
             packages are built with colcon and sourced into the workspace."
                .to_string(),
            meta("https://docs.example/ros2/packages", "ROS2", "Packages"),
        ),
        (
            "gazebo-worlds".to_string(),
            "Gazebo simulation loads SDF world files describing models, \
             lighting, and physics engine settings."
                .to_string(),
            meta("https://docs.example/gazebo/worlds", "Gazebo", "Worlds"),
        ),
        (
            "gazebo-sensors".to_string(),
            "Sensors attach to Gazebo robot models through plugins and \
             publish simulated readings back into ROS topics."
                .to_string(),
            meta("https://docs.example/gazebo/sensors", "Gazebo", "Sensors"),
        ),
        (
            "isaac-setup".to_string(),
            "Isaac Sim builds on Omniverse and USD assets to simulate \
             robots with NVIDIA RTX rendering."
                .to_string(),
            meta("https://docs.example/isaac/setup", "Isaac Sim", "Setup"),
        ),
        (
            "vla-models".to_string(),
            "Vision-Language-Action models ground natural language \
             commands in visual observations to produce robot actions."
                .to_string(),
            meta("https://docs.example/vla/models", "VLA", "Models"),
        ),
        (
            "slam-intro".to_string(),
            "SLAM estimates a robot pose and a map of an unknown \
             environment at the same time from sensor streams."
                .to_string(),
            meta("https://docs.example/robotics/slam", "Robotics", "SLAM"),
        ),
        (
            "path-planning".to_string(),
            "Path planning searches the configuration space for a \
             collision-free trajectory between start and goal."
                .to_string(),
            meta("https://docs.example/robotics/planning", "Robotics", "Path Planning"),
        ),
    ]
}

/// Embed and index the demo corpus, then wire up a validator.
pub fn build_validator(config: ValidationConfig) -> Result<Validator> {
    let embedder = Arc::new(HashEmbedder::default());
    let documents = demo_documents();

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message("indexing demo corpus");

    let mut index = MemoryVectorIndex::new();
    for (id, content, metadata) in &documents {
        let vector = embedder.embed(content, EmbedPurpose::Document)?;
        index.insert(id.clone(), content.clone(), metadata.clone(), vector);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Validator::new(embedder, Arc::new(index), config))
}
