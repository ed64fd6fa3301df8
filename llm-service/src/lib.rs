//! Generative-model client crate for the snow agent backend.
//!
//! Responsibilities:
//! - Thin REST client for a Vertex-hosted generative model
//!   ([`services::vertex_service::VertexService`]): `:generateContent` for
//!   text generation and `:predict` for embeddings.
//! - Typed response shape ([`response::GenerateContentResponse`]) with the
//!   defensive [`response::safe_text`] extractor that never fails on empty,
//!   blocked, or partially populated responses.
//! - The [`generation::GenerativeModel`] trait seam plus
//!   [`generation::generate_text_with_retry`], a single softened-prompt
//!   retry for spurious empty generations.
//! - Fixed generation profiles ([`config::gen_config::GenerationConfig`]).
//!
//! Construct one [`VertexService`](services::vertex_service::VertexService)
//! at process start, wrap it in `Arc`, and pass clones to dependents.

pub mod config;
pub mod error_handler;
pub mod generation;
pub mod response;
pub mod services;

pub use config::gen_config::GenerationConfig;
pub use config::vertex_config::VertexConfig;
pub use error_handler::{LlmError, Result};
pub use generation::{
    DEFAULT_SOFTEN_RULES, GenerativeModel, SoftenRule, TextEmbedder, generate_text_with_retry,
};
pub use response::{GenerateContentResponse, safe_text};
pub use services::vertex_service::VertexService;
