use thiserror::Error;

/// Raw completion does not follow the `marker + numbered list` format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("completion does not contain the '{marker}' marker")]
    MissingMarker { marker: &'static str },

    #[error("marker '{marker}' present but no content follows")]
    EmptySection { marker: &'static str },
}
