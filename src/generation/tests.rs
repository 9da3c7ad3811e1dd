use super::*;
use crate::constants::{
    DEFAULT_GENERATION_MODEL, DEFAULT_MAX_NEW_TOKENS, DEFAULT_QUERY, DEFAULT_SYSTEM_PROMPT,
    DEFAULT_TEMPERATURE, DIAGNOSES_MARKER,
};

mod prompt_tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let prompt = CasePrompt::new("45M with cough")
            .with_system_prompt("SYS")
            .with_query("Q?");

        assert_eq!(
            prompt.render(),
            "SYS\n\nCase: 45M with cough\n\nQuery: Q?\n\nDiagnoses:"
        );
    }

    #[test]
    fn test_render_defaults() {
        let rendered = CasePrompt::new("case text").render();

        assert!(rendered.starts_with(DEFAULT_SYSTEM_PROMPT));
        assert!(rendered.contains(&format!("Query: {DEFAULT_QUERY}")));
        assert!(rendered.ends_with(DIAGNOSES_MARKER));
    }

    #[test]
    fn test_render_does_not_expand_placeholders_in_case() {
        let rendered = CasePrompt::new("patient wrote {query} on a form")
            .with_query("Q")
            .render();

        assert!(rendered.contains("Case: patient wrote {query} on a form"));
        assert!(rendered.contains("Query: Q\n"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.model, DEFAULT_GENERATION_MODEL);
        assert_eq!(config.max_new_tokens, DEFAULT_MAX_NEW_TOKENS);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generator_config_builders() {
        let config = GeneratorConfig::new("gpt-4o-mini")
            .with_max_new_tokens(128)
            .with_temperature(0.7);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_new_tokens, 128);
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn test_generator_config_rejects_empty_model() {
        let err = GeneratorConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, GenerationError::InvalidConfig { .. }));
    }

    #[test]
    fn test_generator_config_rejects_zero_tokens() {
        let err = GeneratorConfig::default()
            .with_max_new_tokens(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("max_new_tokens"));
    }

    #[test]
    fn test_generator_config_rejects_bad_temperature() {
        for temperature in [-0.1, 2.5, f64::NAN] {
            let err = GeneratorConfig::default()
                .with_temperature(temperature)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("temperature"));
        }
    }

    #[test]
    fn test_genai_generator_validates_config() {
        let err = GenaiGenerator::new(GeneratorConfig::new("")).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidConfig { .. }));
    }

    #[test]
    fn test_genai_generator_model_name() {
        let generator = GenaiGenerator::new(GeneratorConfig::new("meditron:7b")).expect("valid");
        assert_eq!(generator.model_name(), "meditron:7b");
        assert!(format!("{generator:?}").contains("meditron:7b"));
    }
}

mod scripted_tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_appends_continuation() {
        let generator = ScriptedGenerator::new(" 1. A\n2. B");

        let completion = generator.generate("Diagnoses:").await.expect("generates");

        assert_eq!(completion.as_str(), "Diagnoses: 1. A\n2. B");
        assert_eq!(generator.prompts(), vec!["Diagnoses:"]);
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let generator = ScriptedGenerator::failing().with_model("broken");

        let err = generator.generate("prompt").await.unwrap_err();
        assert!(matches!(err, GenerationError::ProviderFailed { ref model, .. } if model == "broken"));
    }

    #[test]
    fn test_raw_completion_accessors() {
        let completion = RawCompletion::from("text".to_string());
        assert_eq!(completion.as_ref(), "text");
        assert_eq!(completion.to_string(), "text");
        assert_eq!(completion.into_inner(), "text");
    }
}
