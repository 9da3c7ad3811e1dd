//! Rank-weighted semantic similarity scoring.
//!
//! Each diagnosis is embedded and compared with the ground truth by cosine
//! similarity. The per-rank similarities are combined with harmonic weights
//! `1 / rank`, so a correct answer at rank 1 counts fully while the same answer
//! at rank 5 counts a fifth as much:
//!
//! ```text
//! metric = sum(sim_i / i) / sum(1 / i)
//! ```
//!
//! Scoring is synchronous and performs no I/O beyond the embedding provider.

pub mod error;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::{
    RankWeightedScorer, cosine_similarity, rank_weight, score, score_detailed, weighted_mean,
};
pub use types::{DiagnosisScore, ScoreBreakdown};
