//! Read-side vector retrieval for the snow agent backend.
//!
//! The content store is an external Qdrant collection whose points carry
//! `doc_path` / `chunk_id` / `chunk_text` payload fields. This crate is a
//! deliberate thin passthrough: it embeds the query, runs a similarity
//! search, and returns hits in store-ranked order. No local re-ranking and
//! no deduplication — ranking quality is entirely the store's
//! responsibility.
//!
//! Index construction and ingestion are out of scope; this crate only
//! reads.

pub mod config;
pub mod errors;
pub mod qdrant_facade;
pub mod record;
pub mod retrieve;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use qdrant_facade::ChunkStore;
pub use record::RetrievedChunk;
pub use retrieve::retrieve_top_chunks;
