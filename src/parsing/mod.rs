//! Extraction of a ranked diagnosis list from raw model output.
//!
//! The model is prompted with a template ending in `Diagnoses:` and is expected
//! to continue with a numbered list:
//!
//! ```text
//! Diagnoses: 1. Pulmonary histoplasmosis
//! 2. Sarcoidosis
//! 3. Tuberculosis
//! ```
//!
//! [`parse_diagnoses`] is best-effort: it tolerates an echoed marker, stray
//! preamble and trailing explanation lines, but fails loudly with
//! [`ParseError`] when the marker is missing or nothing follows it.

pub mod error;
pub mod parser;
pub mod types;


pub use error::ParseError;
pub use parser::parse_diagnoses;
pub use types::{DiagnosisList, RankedDiagnosis};
