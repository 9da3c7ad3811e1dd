//! Embedding providers.
//!
//! - [`EmbeddingProvider`] is the capability the scorer consumes.
//! - [`BertEmbedder`] runs a BERT sentence encoder (PubMedBERT by default) via candle.
//! - `MockEmbedder` (tests / `mock` feature) serves a fixed text -> vector table.

/// BERT encoder with mean pooling.
pub mod bert;
/// Embedder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Embedder backed by a BERT checkpoint or a deterministic stub.
pub mod encoder;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Provider trait.
pub mod provider;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::{BERT_EMBEDDING_DIM, BERT_MAX_SEQ_LEN, EmbedderConfig};
pub use encoder::BertEmbedder;
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use provider::EmbeddingProvider;
