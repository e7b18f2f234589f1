//! Embedding collaborator trait and HTTP-backed implementation
//!
//! The engine treats embedding as an opaque, deterministic function from
//! text to a fixed-dimension vector. [`HttpEmbedder`] drives an
//! OpenAI-compatible `/v1/embeddings` endpoint; tests substitute
//! synthetic embedders through the [`Embedder`] trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{GlossaryError, Result};

/// Request timeout for the embedding endpoint
const EMBED_TIMEOUT: Duration = Duration::from_secs(30);

/// Opaque text-to-vector collaborator.
///
/// Implementations must be deterministic for a fixed model version and
/// safe for concurrent read access.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Encode a single text into a fixed-dimension vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Encode a batch of texts, preserving input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }
}

/// L2-normalize a vector in place so inner product equals cosine
/// similarity. Zero vectors are left untouched.
pub fn normalize_l2(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

/// Embedding client for an OpenAI-compatible `/v1/embeddings` endpoint
pub struct HttpEmbedder {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl HttpEmbedder {
    /// Create a client for the given endpoint and model name
    pub fn new(endpoint: &str, model: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(EMBED_TIMEOUT)
            .build()
            .map_err(|e| GlossaryError::Embedding(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            model: model.to_string(),
        })
    }

    async fn request(&self, input: &[String]) -> Result<Vec<Vec<f32>>> {
        let body = EmbeddingRequest {
            model: &self.model,
            input,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| GlossaryError::Embedding(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GlossaryError::Embedding(format!(
                "endpoint returned {}",
                response.status()
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| GlossaryError::Embedding(e.to_string()))?;

        if parsed.data.len() != input.len() {
            return Err(GlossaryError::Embedding(format!(
                "expected {} vectors, got {}",
                input.len(),
                parsed.data.len()
            )));
        }

        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.request(&[text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| GlossaryError::Embedding("empty response".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request(texts).await
    }
}
