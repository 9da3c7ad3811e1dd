use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Ordered diagnoses; index 0 is rank 1 (most likely).
pub struct DiagnosisList {
    entries: Vec<String>,
}

impl DiagnosisList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn into_inner(self) -> Vec<String> {
        self.entries
    }

    /// Returns the diagnosis at a 1-based rank.
    pub fn get(&self, rank: usize) -> Option<&str> {
        rank.checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
            .map(String::as_str)
    }

    /// Pairs every entry with its 1-based rank.
    pub fn ranked(&self) -> impl ExactSizeIterator<Item = RankedDiagnosis<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, text)| RankedDiagnosis {
                rank: idx + 1,
                text: text.as_str(),
            })
    }

    /// Drops blank entries. Ranks of the remaining entries shift up.
    pub fn without_blank(self) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .filter(|entry| !entry.trim().is_empty())
                .collect(),
        }
    }
}

impl From<Vec<String>> for DiagnosisList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl From<Vec<&str>> for DiagnosisList {
    fn from(entries: Vec<&str>) -> Self {
        Self::new(entries.into_iter().map(str::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a DiagnosisList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A diagnosis with its explicit 1-based rank.
pub struct RankedDiagnosis<'a> {
    pub rank: usize,
    pub text: &'a str,
}
