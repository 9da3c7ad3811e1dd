use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_QUERY, DEFAULT_SYSTEM_PROMPT, DIAGNOSES_MARKER};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Inputs for the DDx prompt.
///
/// Renders as `{system_prompt}\n\nCase: {case}\n\nQuery: {query}\n\nDiagnoses:`.
pub struct CasePrompt {
    pub system_prompt: String,
    pub case: String,
    pub query: String,
}

impl CasePrompt {
    /// Builds a prompt for `case` with the default system prompt and query.
    pub fn new(case: impl Into<String>) -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            case: case.into(),
            query: DEFAULT_QUERY.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Renders the prompt. The output always ends with the diagnoses marker.
    pub fn render(&self) -> String {
        format!(
            "{}\n\nCase: {}\n\nQuery: {}\n\n{}",
            self.system_prompt, self.case, self.query, DIAGNOSES_MARKER
        )
    }
}
