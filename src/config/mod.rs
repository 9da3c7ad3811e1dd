//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `DDX_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_GENERATION_MODEL, DEFAULT_MAX_NEW_TOKENS, DEFAULT_TEMPERATURE, MAX_TEMPERATURE,
};
use crate::embedding::EmbedderConfig;
use crate::generation::GeneratorConfig;

/// Benchmark configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `DDX_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Generation model name (resolved by genai). Default: `meditron:7b`.
    pub generation_model: String,

    /// Directory of the BERT embedding model. Stub embeddings when unset.
    pub embedding_model_path: Option<PathBuf>,

    /// JSON file with the clinical cases to run.
    pub cases_path: Option<PathBuf>,

    /// Max tokens generated per case. Default: `50`.
    pub max_new_tokens: u32,

    /// Sampling temperature. Default: `0.1`.
    pub temperature: f64,

    /// Use the scripted generator instead of a real provider.
    pub mock_provider: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            embedding_model_path: None,
            cases_path: None,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            mock_provider: false,
        }
    }
}

impl Config {
    pub const ENV_GENERATION_MODEL: &'static str = "DDX_GENERATION_MODEL";
    pub const ENV_EMBEDDING_MODEL_PATH: &'static str = EmbedderConfig::ENV_MODEL_PATH;
    pub const ENV_CASES_PATH: &'static str = "DDX_CASES_PATH";
    pub const ENV_MAX_NEW_TOKENS: &'static str = "DDX_MAX_NEW_TOKENS";
    pub const ENV_TEMPERATURE: &'static str = "DDX_TEMPERATURE";
    pub const ENV_MOCK_PROVIDER: &'static str = "DDX_MOCK_PROVIDER";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let generation_model =
            Self::parse_string_from_env(Self::ENV_GENERATION_MODEL, defaults.generation_model);
        let embedding_model_path = Self::parse_optional_path_from_env(Self::ENV_EMBEDDING_MODEL_PATH);
        let cases_path = Self::parse_optional_path_from_env(Self::ENV_CASES_PATH);
        let max_new_tokens =
            Self::parse_u32_from_env(Self::ENV_MAX_NEW_TOKENS, defaults.max_new_tokens)?;
        let temperature = Self::parse_f64_from_env(Self::ENV_TEMPERATURE, defaults.temperature)?;
        let mock_provider = env::var_os(Self::ENV_MOCK_PROVIDER).is_some_and(|v| !v.is_empty());

        Ok(Self {
            generation_model,
            embedding_model_path,
            cases_path,
            max_new_tokens,
            temperature,
            mock_provider,
        })
    }

    /// Validates values and paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation_model.trim().is_empty() {
            return Err(ConfigError::EmptyModelName);
        }

        if self.max_new_tokens == 0 {
            return Err(ConfigError::InvalidMaxNewTokens {
                value: self.max_new_tokens,
            });
        }

        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(ConfigError::InvalidTemperature {
                value: self.temperature,
                max: MAX_TEMPERATURE,
            });
        }

        if let Some(ref path) = self.embedding_model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.cases_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Generation settings for [`GenaiGenerator`](crate::generation::GenaiGenerator).
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.generation_model.clone())
            .with_max_new_tokens(self.max_new_tokens)
            .with_temperature(self.temperature)
    }

    /// Embedder settings; stub mode when no model path is configured.
    pub fn embedder_config(&self) -> EmbedderConfig {
        match &self.embedding_model_path {
            Some(path) => EmbedderConfig::new(path.clone()),
            None => EmbedderConfig::stub(),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_u32_from_env(var_name: &'static str, default: u32) -> Result<u32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::IntParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::FloatParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }
}
