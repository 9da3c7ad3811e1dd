use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use super::*;
use crate::constants::{DEFAULT_GROUND_TRUTH, DIAGNOSES_MARKER};
use crate::embedding::MockEmbedder;
use crate::generation::ScriptedGenerator;
use crate::parsing::ParseError;
use crate::scoring::ScoringError;

fn case() -> ClinicalCase {
    ClinicalCase::new("case-1", "45M, cave explorer, cough and hilar adenopathy")
}

fn embedder() -> MockEmbedder {
    MockEmbedder::new(2)
        .with_vector(DEFAULT_GROUND_TRUTH, vec![1.0, 0.0])
        .with_vector("Pulmonary histoplasmosis", vec![1.0, 0.0])
        .with_vector("Sarcoidosis", vec![0.0, 1.0])
}

mod case_tests {
    use super::*;

    #[test]
    fn test_parse_cases_array() {
        let cases = parse_cases(
            r#"[
                {"id": "a", "presentation": "p1", "ground_truth": "Sarcoidosis"},
                {"id": "b", "presentation": "p2"}
            ]"#,
        )
        .expect("valid json");

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].ground_truth, "Sarcoidosis");
        assert_eq!(cases[1].ground_truth, DEFAULT_GROUND_TRUTH);
    }

    #[test]
    fn test_parse_cases_single_object() {
        let cases = parse_cases(r#"{"id": "solo", "presentation": "p"}"#).expect("valid json");
        assert_eq!(cases, vec![ClinicalCase::new("solo", "p")]);
    }

    #[test]
    fn test_parse_cases_rejects_missing_presentation() {
        assert!(parse_cases(r#"{"id": "x"}"#).is_err());
    }

    #[test]
    fn test_load_cases_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"id": "f", "presentation": "p"}}]"#).expect("write");

        let cases = load_cases(file.path()).expect("loads");
        assert_eq!(cases[0].id, "f");
    }

    #[test]
    fn test_load_cases_empty_array() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "[]").expect("write");

        let err = load_cases(file.path()).unwrap_err();
        assert!(matches!(err, BenchmarkError::NoCases));
    }

    #[test]
    fn test_load_cases_invalid_json() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");

        let err = load_cases(file.path()).unwrap_err();
        assert!(matches!(err, BenchmarkError::Json { .. }));
    }

    #[test]
    fn test_load_cases_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_cases(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, BenchmarkError::Io { .. }));
    }
}

mod runner_tests {
    use super::*;

    #[tokio::test]
    async fn test_run_case_scores_generated_list() {
        let generator = Arc::new(
            ScriptedGenerator::new(" 1. Pulmonary histoplasmosis\n2. Sarcoidosis\n\nExplanation")
                .with_model("meditron:7b"),
        );
        let runner = BenchmarkRunner::new(generator.clone(), Arc::new(embedder()));

        let report = runner.run_case(&case()).await.expect("runs");

        assert_eq!(report.model, "meditron:7b");
        assert_eq!(report.case_id, "case-1");
        assert_eq!(report.ground_truth, DEFAULT_GROUND_TRUTH);
        assert_eq!(report.scores.len(), 2);
        assert_eq!(report.scores[0].diagnosis, "Pulmonary histoplasmosis");
        assert!((report.scores[0].similarity - 1.0).abs() < 1e-9);
        assert!(report.scores[1].similarity.abs() < 1e-9);
        // (1 * 1 + 0 * 0.5) / 1.5
        assert!((report.weighted_similarity - 2.0 / 3.0).abs() < 1e-9);
        assert!(report.raw_completion.ends_with("Explanation"));

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Case: 45M, cave explorer"));
        assert!(prompts[0].ends_with(DIAGNOSES_MARKER));
    }

    #[tokio::test]
    async fn test_run_case_uses_runner_config() {
        let generator = Arc::new(ScriptedGenerator::new(" 1. Sarcoidosis"));
        let config = RunnerConfig::default()
            .with_system_prompt("SYS")
            .with_query("Q");
        let runner = BenchmarkRunner::with_config(generator.clone(), Arc::new(embedder()), config);

        runner.run_case(&case()).await.expect("runs");

        assert!(generator.prompts()[0].starts_with("SYS\n\nCase: "));
        assert!(generator.prompts()[0].contains("Query: Q\n"));
        assert_eq!(runner.config().query, "Q");
    }

    #[tokio::test]
    async fn test_run_case_missing_marker() {
        // Returns the continuation without echoing the prompt.
        struct NoMarker;

        #[async_trait::async_trait]
        impl crate::generation::GenerationProvider for NoMarker {
            async fn generate(
                &self,
                _prompt: &str,
            ) -> Result<crate::generation::RawCompletion, crate::generation::GenerationError>
            {
                Ok(crate::generation::RawCompletion::new("1. Sarcoidosis"))
            }

            fn model_name(&self) -> &str {
                "no-marker"
            }
        }

        let runner = BenchmarkRunner::new(Arc::new(NoMarker), Arc::new(embedder()));
        let err = runner.run_case(&case()).await.unwrap_err();

        assert!(matches!(
            err,
            BenchmarkError::Parse {
                source: ParseError::MissingMarker { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_run_case_empty_list_is_scoring_error() {
        let generator = Arc::new(ScriptedGenerator::new("   "));
        let runner = BenchmarkRunner::new(generator, Arc::new(embedder()));

        let err = runner.run_case(&case()).await.unwrap_err();

        assert!(matches!(
            err,
            BenchmarkError::Scoring {
                source: ScoringError::EmptyInput,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_run_case_generation_failure() {
        let runner = BenchmarkRunner::new(
            Arc::new(ScriptedGenerator::failing()),
            Arc::new(embedder()),
        );

        let err = runner.run_case(&case()).await.unwrap_err();
        assert!(matches!(err, BenchmarkError::Generation(_)));
    }

    #[tokio::test]
    async fn test_run_all_shares_run_id_and_averages() {
        let generator = Arc::new(ScriptedGenerator::new(" 1. Pulmonary histoplasmosis"));
        let runner = BenchmarkRunner::new(generator, Arc::new(embedder()));
        let cases = vec![
            case(),
            ClinicalCase::new("case-2", "sarcoid-like").with_ground_truth("Sarcoidosis"),
        ];

        let summary = runner.run_all(&cases).await.expect("runs");

        assert_eq!(summary.cases.len(), 2);
        assert!(summary.cases.iter().all(|c| c.run_id == summary.run_id));
        assert!((summary.cases[0].weighted_similarity - 1.0).abs() < 1e-9);
        assert!(summary.cases[1].weighted_similarity.abs() < 1e-9);
        assert!((summary.mean_weighted_similarity - 0.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_run_all_rejects_empty() {
        let runner = BenchmarkRunner::new(
            Arc::new(ScriptedGenerator::new(" 1. A")),
            Arc::new(embedder()),
        );

        let err = runner.run_all(&[]).await.unwrap_err();
        assert!(matches!(err, BenchmarkError::NoCases));
    }

    #[tokio::test]
    async fn test_report_serializes() {
        let runner = BenchmarkRunner::new(
            Arc::new(ScriptedGenerator::new(" 1. Pulmonary histoplasmosis")),
            Arc::new(embedder()),
        );
        let report = runner.run_case(&case()).await.expect("runs");

        let json = serde_json::to_value(&report).expect("serializes");
        assert_eq!(json["case_id"], "case-1");
        assert_eq!(json["scores"][0]["rank"], 1);
        assert!(json["run_id"].is_string());
        assert!(json["generated_at"].is_string());
    }
}
