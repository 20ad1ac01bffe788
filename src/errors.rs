use thiserror::Error;

/// Error type for ingestion-boundary failures.
///
/// The sampling engine itself never fails: malformed questions pass through,
/// unknown categories are no-ops, and invalid size requests degrade to all
/// mode. Errors only arise while parsing raw quiz data into [`crate::Question`]
/// records.
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("quiz data must be a JSON array, got {0}")]
    NotAnArray(String),
}
