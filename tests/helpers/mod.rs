#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use memoir::embedding::{EmbeddingError, EmbeddingProvider};
use memoir::memory::types::{MemoryCategory, MemoryRecord};

/// Fixed "now" shared by deterministic tests.
pub fn fixed_now() -> DateTime<Utc> {
    "2026-08-15T12:00:00Z".parse().unwrap()
}

/// Provider that always returns the same query vector.
pub struct FixedProvider {
    pub vector: Vec<f32>,
}

impl EmbeddingProvider for FixedProvider {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vector.clone())
    }

    fn dimensions(&self) -> usize {
        self.vector.len()
    }
}

/// Provider that always fails, simulating an unreachable embedding API.
pub struct UnavailableProvider;

impl EmbeddingProvider for UnavailableProvider {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::EmptyResponse)
    }

    fn dimensions(&self) -> usize {
        0
    }
}

/// Generate a deterministic 8-dim embedding with a spike at position `seed`.
/// Distinct seeds produce orthogonal vectors.
pub fn test_embedding(seed: usize) -> Vec<f32> {
    let mut v = vec![0.0f32; 8];
    v[seed % 8] = 1.0;
    v
}

/// Build a record with the fields the scorers read.
pub fn make_record(
    id: &str,
    category: MemoryCategory,
    age_days: i64,
    confidence: f64,
    embedding: Option<Vec<f32>>,
) -> MemoryRecord {
    let mut rec = MemoryRecord::new(category, format!("entry {id}"));
    rec.id = id.to_string();
    rec.created_at = Some(fixed_now() - Duration::days(age_days));
    rec.confidence = Some(confidence);
    rec.embedding = embedding;
    rec
}
