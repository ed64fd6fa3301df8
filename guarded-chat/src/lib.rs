//! Guarded RAG chat orchestration.
//!
//! The pipeline for one chat request: deterministic safety gate →
//! retrieval-backed answer generation with bounded retries → answer
//! validation → one targeted re-ask when citations are missing →
//! append-only transaction log. Two independent single-shot helpers ride
//! along: question classification ([`classify_question`]) and constrained
//! announcement drafting ([`generate_announcement`]).
//!
//! Execution is request-scoped and strictly sequential; the only shared
//! state is the set of `Arc` client handles held by [`GuardedChat`],
//! constructed once at process start.

pub mod announce;
pub mod answer;
pub mod chat;
pub mod classify;
pub mod error;
pub mod gate;
pub mod prompt;
pub mod retrieve;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use announce::generate_announcement;
pub use answer::{RagOutcome, rag_answer};
pub use chat::{ChatOutcome, GuardedChat, REFUSAL};
pub use classify::{Category, classify_question};
pub use error::ChatError;
pub use gate::{Decision, GateDecision, prompt_filter};
pub use prompt::SENTINEL;
pub use retrieve::{ChunkRetriever, StoreRetriever};
pub use validate::{Issue, ValidationResult, validate_answer};
