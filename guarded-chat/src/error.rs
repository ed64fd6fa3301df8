//! Typed error for the orchestration crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Errors from the model client.
    #[error("LLM error: {0}")]
    Llm(#[from] llm_service::LlmError),

    /// Errors from the retrieval store.
    #[error("store error: {0}")]
    Store(#[from] chunk_store::StoreError),

    /// The classifier produced text outside the fixed label set.
    ///
    /// Hard validation failure: downstream systems depend on exact label
    /// matching, so the raw output is surfaced instead of being coerced to
    /// a default.
    #[error("unexpected category: {raw:?}")]
    UnexpectedCategory { raw: String },
}
