//! OpenAI-compatible remote embedding provider.
//!
//! Implements [`EmbeddingProvider`] against any `/embeddings` endpoint that
//! speaks the OpenAI wire format (OpenAI itself, Azure, local gateways).
//! Requests carry a hard timeout so a slow provider degrades retrieval to
//! the recency fallback instead of hanging it.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{EmbeddingError, EmbeddingProvider};
use crate::config::EmbeddingConfig;

/// Remote embedding provider using the OpenAI `/embeddings` API shape.
pub struct OpenAiEmbeddingProvider {
    client: Client,
    api_base: String,
    model: String,
    api_key_env: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiEmbeddingProvider {
    pub fn new(config: &EmbeddingConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        tracing::info!(
            api_base = %config.api_base,
            model = %config.model,
            "embedding provider ready"
        );

        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            dimensions: config.dimensions,
        }
    }

    fn api_key(&self) -> Result<String, EmbeddingError> {
        std::env::var(&self.api_key_env)
            .map_err(|_| EmbeddingError::MissingApiKey(self.api_key_env.clone()))
    }
}

impl EmbeddingProvider for OpenAiEmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyText);
        }
        let api_key = self.api_key()?;

        let url = format!("{}/embeddings", self.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&EmbeddingRequest {
                model: &self.model,
                input: text,
            })
            .send()?
            .error_for_status()?;

        let body: EmbeddingResponse = response.json()?;
        let vector = body
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(EmbeddingError::EmptyResponse)?;

        if vector.is_empty() {
            return Err(EmbeddingError::EmptyResponse);
        }
        if vector.len() != self.dimensions {
            return Err(EmbeddingError::Dimensions {
                got: vector.len(),
                want: self.dimensions,
            });
        }

        tracing::debug!(chars = text.len(), dims = vector.len(), "embedded query");
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
