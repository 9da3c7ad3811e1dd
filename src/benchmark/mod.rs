//! End-to-end benchmark: prompt -> generate -> parse -> score.
//!
//! Cases come from a JSON file (see [`load_cases`]). Each case produces a
//! [`CaseReport`]; a run over many cases produces a [`BenchmarkSummary`].

pub mod case;
pub mod error;
pub mod report;
pub mod runner;

#[cfg(test)]
mod tests;

pub use case::{ClinicalCase, load_cases, parse_cases};
pub use error::BenchmarkError;
pub use report::{BenchmarkSummary, CaseReport};
pub use runner::{BenchmarkRunner, RunnerConfig};
