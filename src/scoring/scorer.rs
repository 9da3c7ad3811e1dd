use crate::embedding::EmbeddingProvider;
use crate::parsing::DiagnosisList;

use super::error::ScoringError;
use super::types::{DiagnosisScore, ScoreBreakdown};

/// Rank-weighted mean cosine similarity between a ground truth and a ranked list.
///
/// Owns its embedding provider; see [`score`] / [`score_detailed`] for the
/// borrowed form.
pub struct RankWeightedScorer<E> {
    embedder: E,
}

impl<E: std::fmt::Debug> std::fmt::Debug for RankWeightedScorer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankWeightedScorer")
            .field("embedder", &self.embedder)
            .finish()
    }
}

impl<E: EmbeddingProvider> RankWeightedScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn score(
        &self,
        ground_truth: &str,
        diagnoses: &DiagnosisList,
    ) -> Result<f64, ScoringError> {
        score(ground_truth, diagnoses, &self.embedder)
    }

    pub fn score_detailed(
        &self,
        ground_truth: &str,
        diagnoses: &DiagnosisList,
    ) -> Result<ScoreBreakdown, ScoringError> {
        score_detailed(ground_truth, diagnoses, &self.embedder)
    }
}

/// Returns `sum(similarity_i / i) / sum(1 / i)` over the ranked diagnoses.
pub fn score<E: EmbeddingProvider + ?Sized>(
    ground_truth: &str,
    diagnoses: &DiagnosisList,
    embed: &E,
) -> Result<f64, ScoringError> {
    score_detailed(ground_truth, diagnoses, embed).map(|breakdown| breakdown.weighted_similarity)
}

/// Like [`score`], keeping the per-rank similarities.
///
/// The ground truth is embedded once and the diagnoses in a single batch; each
/// returned vector is matched to its diagnosis by explicit rank.
pub fn score_detailed<E: EmbeddingProvider + ?Sized>(
    ground_truth: &str,
    diagnoses: &DiagnosisList,
    embed: &E,
) -> Result<ScoreBreakdown, ScoringError> {
    if diagnoses.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let ground_vec = embed.encode(ground_truth)?;
    let ground_norm = l2_norm(&ground_vec);
    if is_degenerate(ground_norm) {
        return Err(ScoringError::DegenerateVector { rank: None });
    }

    let texts: Vec<&str> = diagnoses.ranked().map(|d| d.text).collect();
    let vectors = embed.encode_batch(&texts)?;
    if vectors.len() != texts.len() {
        return Err(ScoringError::BatchSizeMismatch {
            expected: texts.len(),
            actual: vectors.len(),
        });
    }

    let scores = diagnoses
        .ranked()
        .zip(vectors.iter())
        .map(|(diagnosis, vector)| {
            if vector.len() != ground_vec.len() {
                return Err(ScoringError::DimensionMismatch {
                    expected: ground_vec.len(),
                    actual: vector.len(),
                });
            }

            let norm = l2_norm(vector);
            if is_degenerate(norm) {
                return Err(ScoringError::DegenerateVector {
                    rank: Some(diagnosis.rank),
                });
            }

            Ok(DiagnosisScore {
                rank: diagnosis.rank,
                diagnosis: diagnosis.text.to_string(),
                similarity: cosine_from_parts(dot(&ground_vec, vector), ground_norm, norm),
                weight: rank_weight(diagnosis.rank),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let weighted_similarity = weighted_mean(scores.iter().map(|s| (s.similarity, s.weight)))
        .ok_or(ScoringError::EmptyInput)?;

    Ok(ScoreBreakdown {
        ground_truth: ground_truth.to_string(),
        scores,
        weighted_similarity,
    })
}

/// Harmonic rank weight `1 / rank` (rank is 1-based).
#[inline]
pub fn rank_weight(rank: usize) -> f64 {
    debug_assert!(rank >= 1, "ranks are 1-based");
    1.0 / rank as f64
}

/// Weighted arithmetic mean of `(value, weight)` pairs.
///
/// Returns `None` when the total weight is zero (including no pairs).
pub fn weighted_mean(pairs: impl IntoIterator<Item = (f64, f64)>) -> Option<f64> {
    let (weighted_sum, total_weight) = pairs
        .into_iter()
        .fold((0.0f64, 0.0f64), |(sum, total), (value, weight)| {
            (sum + value * weight, total + weight)
        });

    if total_weight == 0.0 {
        None
    } else {
        Some(weighted_sum / total_weight)
    }
}

/// Cosine similarity of two vectors, computed in `f64`.
///
/// Returns `None` if the lengths differ or either vector has a zero or
/// non-finite norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if is_degenerate(norm_a) || is_degenerate(norm_b) {
        return None;
    }

    Some(cosine_from_parts(dot(a, b), norm_a, norm_b))
}

/// Zero, NaN and infinite norms have no direction to compare.
#[inline]
fn is_degenerate(norm: f64) -> bool {
    norm == 0.0 || !norm.is_finite()
}

#[inline]
fn cosine_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[inline]
fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum()
}

#[inline]
fn l2_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt()
}
