use std::sync::LazyLock;

use regex::Regex;

use crate::constants::DIAGNOSES_MARKER;

use super::error::ParseError;
use super::types::DiagnosisList;

static LIST_ITEM_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.").expect("valid list item regex"));

/// Parses a raw completion into a ranked [`DiagnosisList`].
///
/// Only the first marker occurrence is treated as the section boundary; any
/// later occurrence (the model echoing the marker) stays part of the section.
/// Item numbers are used as delimiters and discarded, and each item keeps only
/// its first line. Blank items are passed through unchanged.
///
/// An answer with no numbered items yields one entry (its first line), not an
/// empty list.
pub fn parse_diagnoses(raw: &str) -> Result<DiagnosisList, ParseError> {
    let section = answer_section(raw)?;

    let mut fragments = LIST_ITEM_DELIMITER.split(&section).map(first_line);

    let preamble = fragments.next().unwrap_or_default();
    let entries: Vec<String> = fragments.collect();

    if entries.is_empty() {
        // No numbered items: the whole answer is a single diagnosis.
        return Ok(if preamble.is_empty() {
            DiagnosisList::default()
        } else {
            DiagnosisList::new(vec![preamble])
        });
    }

    Ok(DiagnosisList::new(entries))
}

fn answer_section(raw: &str) -> Result<String, ParseError> {
    let mut parts = raw.split(DIAGNOSES_MARKER);
    parts.next();

    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        return Err(ParseError::MissingMarker {
            marker: DIAGNOSES_MARKER,
        });
    }

    let section = rest.join(DIAGNOSES_MARKER);
    if section.is_empty() {
        return Err(ParseError::EmptySection {
            marker: DIAGNOSES_MARKER,
        });
    }

    Ok(section)
}

fn first_line(fragment: &str) -> String {
    fragment
        .trim()
        .split('\n')
        .next()
        .unwrap_or_default()
        .to_string()
}
