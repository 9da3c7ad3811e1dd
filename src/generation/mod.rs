//! Generation providers and the DDx prompt.
//!
//! The prompt ends with `Diagnoses:` and providers return the prompt followed
//! by the model's continuation, which is exactly what
//! [`parse_diagnoses`](crate::parsing::parse_diagnoses) expects.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prompt;
pub mod provider;

#[cfg(test)]
mod tests;

pub use client::{GenaiGenerator, GeneratorConfig};
pub use error::GenerationError;
#[cfg(any(test, feature = "mock"))]
pub use mock::ScriptedGenerator;
pub use prompt::CasePrompt;
pub use provider::{GenerationProvider, RawCompletion};
