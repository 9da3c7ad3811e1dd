use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Similarity of one ranked diagnosis to the ground truth.
pub struct DiagnosisScore {
    /// 1-based rank in the generated list.
    pub rank: usize,
    pub diagnosis: String,
    /// Cosine similarity to the ground truth, in `[-1, 1]`.
    pub similarity: f64,
    /// Rank weight `1 / rank`.
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Per-rank similarities plus the rank-weighted mean.
pub struct ScoreBreakdown {
    pub ground_truth: String,
    /// Ordered by rank.
    pub scores: Vec<DiagnosisScore>,
    pub weighted_similarity: f64,
}

impl ScoreBreakdown {
    /// Number of scored diagnoses.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Highest-similarity entry (earliest rank wins ties).
    pub fn best_match(&self) -> Option<&DiagnosisScore> {
        self.scores.iter().fold(None, |best, score| match best {
            Some(b) if b.similarity >= score.similarity => Some(b),
            _ => Some(score),
        })
    }

    /// Similarity of the rank-1 diagnosis.
    pub fn top_similarity(&self) -> Option<f64> {
        self.scores.first().map(|s| s.similarity)
    }

    /// Sum of all rank weights (the harmonic number `H_n`).
    pub fn total_weight(&self) -> f64 {
        self.scores.iter().map(|s| s.weight).sum()
    }
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ground Truth: {}", self.ground_truth)?;
        for score in &self.scores {
            writeln!(
                f,
                "{:>2}. {} (similarity: {:.4}, weight: {:.4})",
                score.rank, score.diagnosis, score.similarity, score.weight
            )?;
        }
        write!(f, "Weighted similarity: {:.4}", self.weighted_similarity)
    }
}
