//! Prefix selection error types

use thiserror::Error;

use super::domain::PrefixPreference;

/// Failure of a selection or scoring request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Preference that names no computable heuristic (only `NONE` today)
    #[error("Illegal prefix preference {0} given")]
    UnsupportedPreference(PrefixPreference),

    /// Classification-dependent heuristic used without a classification
    #[error("Prefix preference {0} requires a variable classification, but none is available")]
    MissingClassification(PrefixPreference),

    /// Nothing to select from
    #[error("Cannot select a prefix from an empty candidate set")]
    EmptyCandidates,
}

/// Selection result type
pub type SelectionResult<T> = Result<T, SelectionError>;
