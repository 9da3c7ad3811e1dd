use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::GenerationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Full text returned by a generation provider (prompt followed by continuation).
pub struct RawCompletion(String);

impl RawCompletion {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for RawCompletion {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for RawCompletion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RawCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces a completion for a prompt.
///
/// Implementations return the prompt followed by the generated continuation,
/// so a prompt ending in the diagnoses marker yields parseable output.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<RawCompletion, GenerationError>;

    /// Model identifier recorded in benchmark reports.
    fn model_name(&self) -> &str;
}
