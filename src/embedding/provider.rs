use std::sync::Arc;

use super::error::EmbeddingError;

/// Maps text to a fixed-dimension vector for semantic comparison.
///
/// Implementations must be deterministic for identical input within a run and
/// must return vectors of [`embedding_dim`](EmbeddingProvider::embedding_dim)
/// length on every call.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a single string.
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds several strings. Output order matches input order.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.encode(text)).collect()
    }

    /// Length of every vector this provider returns.
    fn embedding_dim(&self) -> usize;
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for &T {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).encode(text)
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).encode_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for Arc<T> {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).encode(text)
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).encode_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }
}
