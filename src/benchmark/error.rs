use std::path::PathBuf;

use thiserror::Error;

use crate::generation::GenerationError;
use crate::parsing::ParseError;
use crate::scoring::ScoringError;

/// Errors from loading cases or running the benchmark.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Model output could not be turned into a diagnosis list.
    #[error("case '{case_id}': {source}")]
    Parse {
        case_id: String,
        #[source]
        source: ParseError,
    },

    /// Scoring the parsed diagnoses failed.
    #[error("case '{case_id}': {source}")]
    Scoring {
        case_id: String,
        #[source]
        source: ScoringError,
    },

    /// The generation provider failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Case file could not be read.
    #[error("failed to read cases from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Case file is not valid case JSON.
    #[error("invalid case file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Case file or run contained no cases.
    #[error("no cases to run")]
    NoCases,

    /// The blocking scoring task panicked or was cancelled.
    #[error("scoring task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
