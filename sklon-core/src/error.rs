//! Error types for the declension engine.

use thiserror::Error;

/// Errors produced while rendering a single request record.
///
/// Every variant is caught at the record boundary by the dispatcher and
/// mapped to the wire failure token; none escape to the batch level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclineError {
    /// Non-numeric, malformed or negative numeric token
    #[error("invalid numeric token: {0}")]
    InvalidNumber(String),

    /// Noun lookup failed against the currency presets and the lexicon
    #[error("noun '{0}' is not in the lexicon")]
    UnknownNoun(String),

    /// Record field count outside the supported {1, 2}
    #[error("record has {0} fields, expected 1 or 2")]
    MalformedRecord(usize),
}

/// Result type for declension operations.
pub type Result<T> = std::result::Result<T, DeclineError>;
