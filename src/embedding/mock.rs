use std::collections::HashMap;
use std::sync::Mutex;

use super::error::EmbeddingError;
use super::provider::EmbeddingProvider;

/// Embedding provider backed by a fixed text -> vector table.
///
/// Unknown text fails with [`EmbeddingError::UnknownText`] unless a fallback
/// vector is set. Every call is recorded so tests can assert call order.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Option<Vec<f32>>,
    embedding_dim: usize,
    calls: Mutex<Vec<String>>,
}

impl MockEmbedder {
    pub fn new(embedding_dim: usize) -> Self {
        Self {
            embedding_dim,
            ..Default::default()
        }
    }

    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    pub fn with_fallback(mut self, vector: Vec<f32>) -> Self {
        self.fallback = Some(vector);
        self
    }

    /// Texts passed to `encode`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl EmbeddingProvider for MockEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }

        self.vectors
            .get(text)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| EmbeddingError::UnknownText {
                text: text.to_string(),
            })
    }

    fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }
}
