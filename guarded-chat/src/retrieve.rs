//! Retrieval seam for the answer pipeline.

use std::sync::Arc;

use async_trait::async_trait;

use chunk_store::{ChunkStore, RetrievedChunk, StoreError, retrieve_top_chunks};
use llm_service::TextEmbedder;

/// Supplies the `top_k` most similar chunks for a query, in store-ranked
/// order.
///
/// The production implementation is [`StoreRetriever`]; tests substitute
/// stub stores.
#[async_trait]
pub trait ChunkRetriever: Send + Sync {
    async fn retrieve(
        &self,
        query: &str,
        top_k: u64,
    ) -> Result<Vec<RetrievedChunk>, StoreError>;
}

/// Qdrant-backed retriever: embeds the query, then searches the store.
pub struct StoreRetriever {
    store: ChunkStore,
    embedder: Arc<dyn TextEmbedder>,
}

impl StoreRetriever {
    pub fn new(store: ChunkStore, embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { store, embedder }
    }
}

#[async_trait]
impl ChunkRetriever for StoreRetriever {
    async fn retrieve(
        &self,
        query: &str,
        top_k: u64,
    ) -> Result<Vec<RetrievedChunk>, StoreError> {
        retrieve_top_chunks(&self.store, self.embedder.as_ref(), query, top_k).await
    }
}
