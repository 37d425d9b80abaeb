//! Domain types for the retrieval validation engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::{Error, Result};

pub type ChunkId = String;
pub type Meta = HashMap<String, String>;

/// Metadata fields every retrieved chunk must carry with non-blank values.
pub const REQUIRED_METADATA_FIELDS: [&str; 3] = ["url", "page_title", "section"];

/// Keyword-derived topic of a validation query.
///
/// Classification is a case-insensitive substring match against fixed
/// keyword sets, first matching category wins, in the declared order.
/// `General` is the catch-all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryCategory {
    #[serde(rename = "ROS2")]
    Ros2,
    Gazebo,
    Isaac,
    #[serde(rename = "VLA")]
    Vla,
    General,
}

impl QueryCategory {
    pub fn classify(query_text: &str) -> Self {
        let lower = query_text.to_lowercase();
        let matches_any = |keywords: &[&str]| keywords.iter().any(|kw| lower.contains(kw));

        if matches_any(&["ros", "ros2", "robot operating system"]) {
            QueryCategory::Ros2
        } else if matches_any(&["gazebo", "simulation", "physics engine"]) {
            QueryCategory::Gazebo
        } else if matches_any(&["isaac", "sim", "nvidia"]) {
            QueryCategory::Isaac
        } else if matches_any(&["vla", "vision", "language", "action"]) {
            QueryCategory::Vla
        } else {
            QueryCategory::General
        }
    }
}

/// A natural-language validation query. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub id: String,
    pub text: String,
    pub category: Option<QueryCategory>,
    pub created_at: DateTime<Utc>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: short_id("query"),
            category: Some(QueryCategory::classify(&text)),
            text,
            created_at: Utc::now(),
        }
    }
}

/// A stored content chunk returned by a similarity search.
///
/// `metadata` keys are free-form; validation only enforces the
/// `REQUIRED_METADATA_FIELDS` subset and passes the rest through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextChunk {
    pub id: ChunkId,
    pub content: String,
    pub metadata: Meta,
    pub created_at: DateTime<Utc>,
}

impl TextChunk {
    pub fn new(id: impl Into<ChunkId>, content: impl Into<String>, metadata: Meta) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata,
            created_at: Utc::now(),
        }
    }

    /// True when every required field is present with a non-blank
    /// (trimmed) value.
    pub fn has_required_metadata(&self) -> bool {
        if self.metadata.is_empty() {
            return false;
        }
        REQUIRED_METADATA_FIELDS
            .iter()
            .all(|field| match self.metadata.get(*field) {
                Some(value) => !value.trim().is_empty(),
                None => false,
            })
    }
}

/// One raw hit from a `VectorIndex`, ranked best-first by the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexHit {
    pub id: ChunkId,
    pub content: String,
    pub metadata: Meta,
    pub score: f32,
}

/// The materialized outcome of one executed query. Created once, never
/// mutated. `similarity_scores` is index-aligned with `chunks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub query_id: String,
    pub chunks: Vec<TextChunk>,
    pub similarity_scores: Vec<f32>,
    pub retrieval_time_ms: f64,
    pub top_k: usize,
    pub executed_at: DateTime<Utc>,
}

impl QueryResult {
    /// Enforces `chunks.len() == similarity_scores.len() <= top_k`.
    pub fn new(
        query_id: impl Into<String>,
        chunks: Vec<TextChunk>,
        similarity_scores: Vec<f32>,
        retrieval_time_ms: f64,
        top_k: usize,
    ) -> Result<Self> {
        if chunks.len() != similarity_scores.len() {
            return Err(Error::InvalidInput(format!(
                "chunk/score misalignment: {} chunks vs {} scores",
                chunks.len(),
                similarity_scores.len()
            )));
        }
        if chunks.len() > top_k {
            return Err(Error::InvalidInput(format!(
                "{} chunks exceed top_k={}",
                chunks.len(),
                top_k
            )));
        }
        Ok(Self {
            query_id: query_id.into(),
            chunks,
            similarity_scores,
            retrieval_time_ms,
            top_k,
            executed_at: Utc::now(),
        })
    }

    /// Ordered chunk-id sequence, used for determinism comparisons.
    pub fn chunk_ids(&self) -> Vec<&str> {
        self.chunks.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Quality scores derived from one `QueryResult`. References its source
/// by id only; derived once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub query_result_id: String,
    pub precision_at_k: f64,
    pub recall_at_k: f64,
    pub relevance_score: f64,
    pub semantic_alignment: f64,
    pub metadata_accuracy: bool,
    pub evaluated_at: DateTime<Utc>,
}

/// Short unique id in the original `query-1a2b3c4d` style.
pub fn short_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &hex[..8])
}
