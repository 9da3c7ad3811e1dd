//! DDx benchmark library crate (used by the `ddx` binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core
//! - [`parse_diagnoses`], [`DiagnosisList`], [`ParseError`] - Extract the ranked
//!   diagnosis list from a completion
//! - [`score`], [`score_detailed`], [`RankWeightedScorer`], [`ScoreBreakdown`],
//!   [`ScoringError`] - Rank-weighted cosine similarity against a ground truth
//!
//! ## Providers
//! - [`EmbeddingProvider`], [`BertEmbedder`], [`EmbedderConfig`] - Sentence embeddings
//! - [`GenerationProvider`], [`GenaiGenerator`], [`GeneratorConfig`], [`CasePrompt`] -
//!   DDx generation
//!
//! ## Benchmark
//! - [`BenchmarkRunner`], [`ClinicalCase`], [`CaseReport`], [`BenchmarkSummary`] -
//!   Prompt, generate, parse and score a set of cases
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod generation;
pub mod parsing;
pub mod scoring;

pub use benchmark::{
    BenchmarkError, BenchmarkRunner, BenchmarkSummary, CaseReport, ClinicalCase, RunnerConfig,
    load_cases, parse_cases,
};
pub use config::{Config, ConfigError};
pub use constants::DIAGNOSES_MARKER;
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    BERT_EMBEDDING_DIM, BERT_MAX_SEQ_LEN, BertEmbedder, EmbedderConfig, EmbeddingError,
    EmbeddingProvider,
};
#[cfg(any(test, feature = "mock"))]
pub use generation::ScriptedGenerator;
pub use generation::{
    CasePrompt, GenaiGenerator, GenerationError, GenerationProvider, GeneratorConfig,
    RawCompletion,
};
pub use parsing::{DiagnosisList, ParseError, RankedDiagnosis, parse_diagnoses};
pub use scoring::{
    DiagnosisScore, RankWeightedScorer, ScoreBreakdown, ScoringError, cosine_similarity,
    rank_weight, score, score_detailed, weighted_mean,
};
