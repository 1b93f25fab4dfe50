//! Text-to-vector embedding boundary.
//!
//! Provides the [`EmbeddingProvider`] trait, the [`EmbeddingError`] taxonomy,
//! and [`cosine_similarity`]. The default provider calls an OpenAI-compatible
//! `/embeddings` endpoint and is created via [`create_provider`] from
//! configuration.
//!
//! Provider failures are soft by design: the reranker treats any
//! [`EmbeddingError`] as "no embedding available" and degrades to its recency
//! fallback instead of surfacing an error to the caller.

pub mod openai;

use anyhow::Result;
use thiserror::Error;

/// Why an embedding could not be produced.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Empty or whitespace-only input text.
    #[error("cannot embed empty text")]
    EmptyText,
    /// The configured API key environment variable is not set.
    #[error("embedding API key not found in environment variable {0}")]
    MissingApiKey(String),
    /// Transport-level failure (connect, timeout, non-2xx, body decode).
    #[error("embedding request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The provider answered but returned no vectors.
    #[error("embedding response contained no vectors")]
    EmptyResponse,
    /// The provider returned a vector of the wrong dimensionality.
    #[error("embedding has {got} dimensions, expected {want}")]
    Dimensions { got: usize, want: usize },
}

/// Trait for embedding text into vectors.
///
/// Methods are synchronous and may block on network I/O; this is the only
/// blocking point in a retrieval call.
#[allow(dead_code)]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text string into a vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Number of dimensions this provider produces.
    fn dimensions(&self) -> usize;
}

/// Create an embedding provider from config.
///
/// Currently only `"openai"` is supported (any OpenAI-compatible
/// `/embeddings` endpoint, selected by `api_base`).
pub fn create_provider(
    config: &crate::config::EmbeddingConfig,
) -> Result<Box<dyn EmbeddingProvider>> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(openai::OpenAiEmbeddingProvider::new(config))),
        other => anyhow::bail!("unknown embedding provider: {other}. Supported: openai"),
    }
}

/// Cosine similarity between two vectors, in `[-1, 1]`.
///
/// Returns `None` if either vector is empty, the lengths differ, or either
/// has zero magnitude. A `None` marks the pair as "no similarity available";
/// it is never an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return None;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|y| y * y).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a * norm_b))
}
