use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding provider error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("no diagnoses to score")]
    EmptyInput,

    #[error("zero-norm or non-finite embedding for {}", describe_rank(.rank))]
    DegenerateVector {
        /// Rank of the offending diagnosis; `None` for the ground truth.
        rank: Option<usize>,
    },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding provider returned {actual} vectors for {expected} inputs")]
    BatchSizeMismatch { expected: usize, actual: usize },
}

fn describe_rank(rank: &Option<usize>) -> String {
    match rank {
        Some(rank) => format!("diagnosis at rank {rank}"),
        None => "ground truth".to_string(),
    }
}
