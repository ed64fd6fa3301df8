//! Log row shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Retrieval metadata kept in the log: which chunks backed the answer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetrievedRef {
    pub doc_path: String,
    pub chunk_id: u32,
    pub distance: f32,
}

/// One chat transaction, appended once per request.
///
/// Citation markers inside `answer` are plain text and round-trip through
/// the store unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatLogRecord {
    /// UTC timestamp of the transaction (serialized RFC 3339).
    pub ts: DateTime<Utc>,
    pub session_id: String,
    pub user_query: String,
    /// Whether the safety gate allowed the request.
    pub prompt_allowed: bool,
    pub prompt_reason: String,
    pub top_k: u64,
    /// Store-ranked retrieval metadata; empty for blocked requests.
    pub retrieved: Vec<RetrievedRef>,
    pub answer: String,
    pub answer_valid: bool,
    pub answer_issues: String,
}
