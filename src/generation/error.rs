use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation provider request failed for model '{model}': {reason}")]
    ProviderFailed { model: String, reason: String },

    #[error("model '{model}' returned no text")]
    EmptyCompletion { model: String },

    #[error("invalid generation configuration: {reason}")]
    InvalidConfig { reason: String },
}
