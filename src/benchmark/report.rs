use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{DiagnosisScore, ScoreBreakdown};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Outcome of benchmarking one case.
pub struct CaseReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub case_id: String,
    pub ground_truth: String,
    /// Per-rank similarities, ordered by rank.
    pub scores: Vec<DiagnosisScore>,
    pub weighted_similarity: f64,
    /// Prompt plus model continuation, as returned by the provider.
    pub raw_completion: String,
}

impl CaseReport {
    pub(crate) fn new(
        run_id: Uuid,
        model: &str,
        case_id: &str,
        breakdown: ScoreBreakdown,
        raw_completion: String,
    ) -> Self {
        Self {
            run_id,
            generated_at: Utc::now(),
            model: model.to_string(),
            case_id: case_id.to_string(),
            ground_truth: breakdown.ground_truth,
            scores: breakdown.scores,
            weighted_similarity: breakdown.weighted_similarity,
            raw_completion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Reports for every case of a run plus the mean metric.
pub struct BenchmarkSummary {
    pub run_id: Uuid,
    pub model: String,
    pub cases: Vec<CaseReport>,
    /// Unweighted mean of the per-case weighted similarities.
    pub mean_weighted_similarity: f64,
}

impl BenchmarkSummary {
    pub(crate) fn new(run_id: Uuid, model: &str, cases: Vec<CaseReport>) -> Self {
        let mean_weighted_similarity = if cases.is_empty() {
            0.0
        } else {
            cases.iter().map(|c| c.weighted_similarity).sum::<f64>() / cases.len() as f64
        };

        Self {
            run_id,
            model: model.to_string(),
            cases,
            mean_weighted_similarity,
        }
    }
}
