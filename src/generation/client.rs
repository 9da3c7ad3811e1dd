use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use tracing::{debug, error};

use crate::constants::{
    DEFAULT_GENERATION_MODEL, DEFAULT_MAX_NEW_TOKENS, DEFAULT_TEMPERATURE, MAX_TEMPERATURE,
};

use super::error::GenerationError;
use super::provider::{GenerationProvider, RawCompletion};

#[derive(Debug, Clone, PartialEq)]
/// Sampling settings for [`GenaiGenerator`].
pub struct GeneratorConfig {
    /// Model name; genai picks the provider adapter from it.
    pub model: String,
    pub max_new_tokens: u32,
    pub temperature: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GENERATION_MODEL.to_string(),
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GeneratorConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.model.trim().is_empty() {
            return Err(GenerationError::InvalidConfig {
                reason: "model cannot be empty".to_string(),
            });
        }

        if self.max_new_tokens == 0 {
            return Err(GenerationError::InvalidConfig {
                reason: "max_new_tokens must be greater than 0".to_string(),
            });
        }

        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(GenerationError::InvalidConfig {
                reason: format!(
                    "temperature must be between 0.0 and {MAX_TEMPERATURE}, got {}",
                    self.temperature
                ),
            });
        }

        Ok(())
    }

    pub fn chat_options(&self) -> ChatOptions {
        ChatOptions::default()
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_new_tokens)
    }
}

/// Generation provider backed by a [`genai::Client`].
pub struct GenaiGenerator {
    client: Client,
    config: GeneratorConfig,
}

impl std::fmt::Debug for GenaiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiGenerator")
            .field("config", &self.config)
            .finish()
    }
}

impl GenaiGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        Self::with_client(Client::default(), config)
    }

    pub fn with_client(client: Client, config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[async_trait]
impl GenerationProvider for GenaiGenerator {
    async fn generate(&self, prompt: &str) -> Result<RawCompletion, GenerationError> {
        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            max_new_tokens = self.config.max_new_tokens,
            temperature = self.config.temperature,
            "Requesting completion"
        );

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        let options = self.config.chat_options();

        let response = self
            .client
            .exec_chat(&self.config.model, request, Some(&options))
            .await
            .map_err(|e| {
                error!(model = %self.config.model, error = %e, "Provider error");
                GenerationError::ProviderFailed {
                    model: self.config.model.clone(),
                    reason: e.to_string(),
                }
            })?;

        let continuation = response
            .first_text()
            .ok_or_else(|| GenerationError::EmptyCompletion {
                model: self.config.model.clone(),
            })?;

        debug!(
            completion_len = continuation.len(),
            "Completion received"
        );

        Ok(RawCompletion::new(format!("{prompt}{continuation}")))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
