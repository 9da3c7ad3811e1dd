use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::case::ClinicalCase;
use super::error::BenchmarkError;
use super::report::{BenchmarkSummary, CaseReport};
use crate::constants::{DEFAULT_QUERY, DEFAULT_SYSTEM_PROMPT};
use crate::embedding::EmbeddingProvider;
use crate::generation::{CasePrompt, GenerationProvider};
use crate::parsing::parse_diagnoses;
use crate::scoring::score_detailed;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Prompt settings shared by every case of a run.
pub struct RunnerConfig {
    pub system_prompt: String,
    pub query: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            query: DEFAULT_QUERY.to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    fn prompt_for(&self, case: &ClinicalCase) -> CasePrompt {
        CasePrompt::new(case.presentation.clone())
            .with_system_prompt(self.system_prompt.clone())
            .with_query(self.query.clone())
    }
}

/// Generates a DDx for each case, parses it and scores it against the ground truth.
pub struct BenchmarkRunner<G, E> {
    generator: Arc<G>,
    embedder: Arc<E>,
    config: RunnerConfig,
}

impl<G, E> BenchmarkRunner<G, E>
where
    G: GenerationProvider,
    E: EmbeddingProvider + 'static,
{
    pub fn new(generator: Arc<G>, embedder: Arc<E>) -> Self {
        Self::with_config(generator, embedder, RunnerConfig::default())
    }

    pub fn with_config(generator: Arc<G>, embedder: Arc<E>, config: RunnerConfig) -> Self {
        Self {
            generator,
            embedder,
            config,
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs one case under a fresh run id.
    pub async fn run_case(&self, case: &ClinicalCase) -> Result<CaseReport, BenchmarkError> {
        self.run_case_with_id(Uuid::new_v4(), case).await
    }

    #[instrument(skip(self, case), fields(case_id = %case.id, model = self.generator.model_name()))]
    async fn run_case_with_id(
        &self,
        run_id: Uuid,
        case: &ClinicalCase,
    ) -> Result<CaseReport, BenchmarkError> {
        let prompt = self.config.prompt_for(case).render();
        let completion = self.generator.generate(&prompt).await?;

        let diagnoses =
            parse_diagnoses(completion.as_str()).map_err(|source| BenchmarkError::Parse {
                case_id: case.id.clone(),
                source,
            })?;
        debug!(count = diagnoses.len(), "Parsed diagnoses");

        // Embedding is CPU-bound; keep it off the async workers.
        let embedder = Arc::clone(&self.embedder);
        let ground_truth = case.ground_truth.clone();
        let breakdown =
            tokio::task::spawn_blocking(move || score_detailed(&ground_truth, &diagnoses, &embedder))
                .await?
                .map_err(|source| BenchmarkError::Scoring {
                    case_id: case.id.clone(),
                    source,
                })?;

        info!(ground_truth = %breakdown.ground_truth, "Scored case");
        for score in &breakdown.scores {
            info!(
                rank = score.rank,
                diagnosis = %score.diagnosis,
                similarity = score.similarity,
                "Diagnosis similarity"
            );
        }
        info!(
            weighted_similarity = breakdown.weighted_similarity,
            "Weighted similarity"
        );

        Ok(CaseReport::new(
            run_id,
            self.generator.model_name(),
            &case.id,
            breakdown,
            completion.into_inner(),
        ))
    }

    /// Runs cases sequentially. Fails on the first case that errors.
    pub async fn run_all(&self, cases: &[ClinicalCase]) -> Result<BenchmarkSummary, BenchmarkError> {
        if cases.is_empty() {
            return Err(BenchmarkError::NoCases);
        }

        let run_id = Uuid::new_v4();
        info!(%run_id, cases = cases.len(), "Starting benchmark run");

        let mut reports = Vec::with_capacity(cases.len());
        for case in cases {
            reports.push(self.run_case_with_id(run_id, case).await?);
        }

        let summary = BenchmarkSummary::new(run_id, self.generator.model_name(), reports);
        info!(
            %run_id,
            mean_weighted_similarity = summary.mean_weighted_similarity,
            "Benchmark run complete"
        );
        Ok(summary)
    }
}
