//! Deterministic offline embedding provider.
//!
//! `HashEmbedder` maps each whitespace token to a vector position via
//! xxHash and L2-normalizes the result. The same text always produces the
//! same vector, which is exactly what retrieval validation needs: any
//! non-determinism observed downstream comes from the pipeline under
//! test, not from the embedder. Network-backed providers implement the
//! same `EmbeddingProvider` trait and live outside this workspace.

use std::hash::{Hash, Hasher};

use tracing::debug;
use twox_hash::XxHash64;

use ragcheck_core::error::{Error, Result};
use ragcheck_core::traits::{EmbedPurpose, EmbeddingProvider};

pub const DEFAULT_DIM: usize = 1024;

pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIM)
    }
}

impl EmbeddingProvider for HashEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str, purpose: EmbedPurpose) -> Result<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(Error::embedding("cannot embed empty text"));
        }
        debug!(len = text.len(), ?purpose, "embedding text");

        let mut v = vec![0f32; self.dim];
        for (i, token) in text.split_whitespace().enumerate() {
            let mut hasher = XxHash64::with_seed(0);
            token.to_lowercase().hash(&mut hasher);
            let h = hasher.finish();
            let idx = (h as usize) % self.dim;
            let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32);
            v[idx] += val + (i as f32 % 3.0) * 0.01;
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt().max(1e-6);
        for x in &mut v {
            *x /= norm;
        }
        Ok(v)
    }
}
