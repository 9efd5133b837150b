//! Error types for the caption placement engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while preparing engine inputs.
///
/// The decision stages themselves never fail on well-formed geometric
/// input; degenerate geometry (zero-area boxes, empty detection lists)
/// falls back to a centered caption instead of erroring.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Malformed detection payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl EngineError {
    /// Create a missing-input error.
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }
}
