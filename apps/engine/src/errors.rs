use thiserror::Error;

/// Engine-level error type.
/// Store corruption is NOT represented here: per-entry failures are dropped
/// with an aggregate warning and never fail a load.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("History store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("History blob error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
