use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_ddx_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var(Config::ENV_GENERATION_MODEL);
        env::remove_var(Config::ENV_EMBEDDING_MODEL_PATH);
        env::remove_var(Config::ENV_CASES_PATH);
        env::remove_var(Config::ENV_MAX_NEW_TOKENS);
        env::remove_var(Config::ENV_TEMPERATURE);
        env::remove_var(Config::ENV_MOCK_PROVIDER);
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.generation_model, "meditron:7b");
    assert!(config.embedding_model_path.is_none());
    assert!(config.cases_path.is_none());
    assert_eq!(config.max_new_tokens, 50);
    assert_eq!(config.temperature, 0.1);
    assert!(!config.mock_provider);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_ddx_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_with_overrides() {
    clear_ddx_env();

    let config = with_env_vars(
        &[
            ("DDX_GENERATION_MODEL", "biomistral:7b"),
            ("DDX_CASES_PATH", "/tmp/cases.json"),
            ("DDX_MAX_NEW_TOKENS", "128"),
            ("DDX_TEMPERATURE", "0.7"),
            ("DDX_MOCK_PROVIDER", "1"),
        ],
        || Config::from_env().expect("should parse"),
    );

    assert_eq!(config.generation_model, "biomistral:7b");
    assert_eq!(config.cases_path, Some(PathBuf::from("/tmp/cases.json")));
    assert_eq!(config.max_new_tokens, 128);
    assert_eq!(config.temperature, 0.7);
    assert!(config.mock_provider);
}

#[test]
#[serial]
fn test_blank_values_fall_back() {
    clear_ddx_env();

    let config = with_env_vars(
        &[
            ("DDX_GENERATION_MODEL", "   "),
            ("DDX_EMBEDDING_MODEL_PATH", ""),
            ("DDX_MOCK_PROVIDER", ""),
        ],
        || Config::from_env().expect("should parse"),
    );

    assert_eq!(config.generation_model, "meditron:7b");
    assert!(config.embedding_model_path.is_none());
    assert!(!config.mock_provider);
}

#[test]
#[serial]
fn test_invalid_max_new_tokens() {
    clear_ddx_env();

    let result = with_env_vars(&[("DDX_MAX_NEW_TOKENS", "lots")], Config::from_env);

    assert!(matches!(
        result,
        Err(ConfigError::IntParseError {
            name: "DDX_MAX_NEW_TOKENS",
            ..
        })
    ));
}

#[test]
#[serial]
fn test_invalid_temperature_format() {
    clear_ddx_env();

    let result = with_env_vars(&[("DDX_TEMPERATURE", "warm")], Config::from_env);

    assert!(matches!(result, Err(ConfigError::FloatParseError { .. })));
}

#[test]
fn test_validate_temperature_range() {
    for temperature in [-0.01, 2.01, f64::NAN] {
        let config = Config {
            temperature,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemperature { .. })
        ));
    }

    for temperature in [0.0, 2.0] {
        let config = Config {
            temperature,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}

#[test]
fn test_validate_zero_tokens() {
    let config = Config {
        max_new_tokens: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidMaxNewTokens { value: 0 })
    ));
}

#[test]
fn test_validate_empty_model() {
    let config = Config {
        generation_model: String::new(),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyModelName)));
}

#[test]
fn test_validate_model_path_must_be_directory() {
    let file = NamedTempFile::new().expect("temp file");
    let config = Config {
        embedding_model_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));

    let dir = TempDir::new().expect("temp dir");
    let config = Config {
        embedding_model_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_cases_path() {
    let dir = TempDir::new().expect("temp dir");

    let config = Config {
        cases_path: Some(dir.path().join("missing.json")),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));

    let config = Config {
        cases_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NotAFile { .. })));

    let file = NamedTempFile::new().expect("temp file");
    let config = Config {
        cases_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_derived_provider_configs() {
    let config = Config {
        generation_model: "gpt-4o-mini".to_string(),
        max_new_tokens: 64,
        temperature: 0.3,
        ..Default::default()
    };

    let generator = config.generator_config();
    assert_eq!(generator.model, "gpt-4o-mini");
    assert_eq!(generator.max_new_tokens, 64);
    assert_eq!(generator.temperature, 0.3);

    assert!(config.embedder_config().testing_stub);

    let config = Config {
        embedding_model_path: Some(PathBuf::from("/models/pubmedbert")),
        ..Default::default()
    };
    let embedder = config.embedder_config();
    assert!(!embedder.testing_stub);
    assert_eq!(embedder.model_dir, PathBuf::from("/models/pubmedbert"));
}
