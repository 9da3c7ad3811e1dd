//! Cross-cutting, shared constants.
//!
//! [`DIAGNOSES_MARKER`] is a contract between the prompt and the parser: the
//! rendered prompt ends with it so the model's continuation lands directly
//! after it.

/// Literal that separates the prompt/preamble from the generated answer.
pub const DIAGNOSES_MARKER: &str = "Diagnoses:";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful medical assistant. You will be provided and asked about a complicated clinical case; read it carefully and then provide a concise DDx.";

pub const DEFAULT_QUERY: &str =
    "Provide five concise diagnoses. These should be sorted by likelihood.";

/// Ground truth used when a case file does not name one.
pub const DEFAULT_GROUND_TRUTH: &str = "Pulmonary histoplasmosis";

pub const DEFAULT_GENERATION_MODEL: &str = "meditron:7b";

pub const DEFAULT_EMBEDDING_MODEL: &str = "NeuML/pubmedbert-base-embeddings";

/// Hidden size of the default BERT-base embedding model.
pub const DEFAULT_EMBEDDING_DIM: usize = 768;

pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

pub const DEFAULT_MAX_NEW_TOKENS: u32 = 50;

pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Upper bound accepted for `DDX_TEMPERATURE`.
pub const MAX_TEMPERATURE: f64 = 2.0;
