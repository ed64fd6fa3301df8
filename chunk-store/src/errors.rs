//! Unified error type for the crate.

use thiserror::Error;

/// Top-level error for chunk-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Qdrant client errors (wrapped).
    #[error("qdrant error: {0}")]
    Qdrant(String),

    /// Query-embedding failures from the model service.
    #[error("embedding error: {0}")]
    Embed(#[from] llm_service::LlmError),
}
