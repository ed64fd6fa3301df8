//! Unified error type for the crate.

use thiserror::Error;

/// Top-level error for chat-log operations.
#[derive(Debug, Error)]
pub enum LogError {
    /// I/O or filesystem errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Row serialization errors.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
