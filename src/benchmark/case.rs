use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::BenchmarkError;
use crate::constants::DEFAULT_GROUND_TRUTH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A clinical case and the diagnosis it should produce.
pub struct ClinicalCase {
    pub id: String,
    /// Free-text case presentation inserted into the prompt.
    pub presentation: String,
    #[serde(default = "default_ground_truth")]
    pub ground_truth: String,
}

impl ClinicalCase {
    pub fn new(id: impl Into<String>, presentation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            presentation: presentation.into(),
            ground_truth: default_ground_truth(),
        }
    }

    pub fn with_ground_truth(mut self, ground_truth: impl Into<String>) -> Self {
        self.ground_truth = ground_truth.into();
        self
    }
}

fn default_ground_truth() -> String {
    DEFAULT_GROUND_TRUTH.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CaseFile {
    Many(Vec<ClinicalCase>),
    One(ClinicalCase),
}

/// Parses cases from JSON: either an array of cases or a single case object.
pub fn parse_cases(json: &str) -> Result<Vec<ClinicalCase>, serde_json::Error> {
    Ok(match serde_json::from_str::<CaseFile>(json)? {
        CaseFile::Many(cases) => cases,
        CaseFile::One(case) => vec![case],
    })
}

/// Reads cases from a JSON file. An empty array is rejected.
pub fn load_cases(path: impl AsRef<Path>) -> Result<Vec<ClinicalCase>, BenchmarkError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| BenchmarkError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cases = parse_cases(&json).map_err(|source| BenchmarkError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if cases.is_empty() {
        return Err(BenchmarkError::NoCases);
    }
    Ok(cases)
}
