use std::sync::Mutex;

use async_trait::async_trait;

use super::error::GenerationError;
use super::provider::{GenerationProvider, RawCompletion};

/// Generation provider that appends a fixed continuation to every prompt.
#[derive(Debug)]
pub struct ScriptedGenerator {
    model: String,
    continuation: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(continuation: impl Into<String>) -> Self {
        Self {
            model: "scripted".to_string(),
            continuation: Some(continuation.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator whose every call fails with [`GenerationError::ProviderFailed`].
    pub fn failing() -> Self {
        Self {
            model: "scripted".to_string(),
            continuation: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GenerationProvider for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<RawCompletion, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.continuation {
            Some(continuation) => Ok(RawCompletion::new(format!("{prompt}{continuation}"))),
            None => Err(GenerationError::ProviderFailed {
                model: self.model.clone(),
                reason: "scripted failure".to_string(),
            }),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
