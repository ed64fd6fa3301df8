//! Wire DTOs for POST /chat.

use serde::{Deserialize, Serialize};

/// Incoming chat request. `top_k` defaults to 10; a missing or empty
/// `session_id` is replaced with a generated one.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,

    #[serde(default = "default_top_k")]
    pub top_k: u64,

    #[serde(default)]
    pub session_id: Option<String>,
}

fn default_top_k() -> u64 {
    10
}

/// Outgoing chat response. `valid`/`issues` carry the fixed trivially-valid
/// marker for blocked requests, since no generation occurred.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub blocked: bool,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<String>,
}
