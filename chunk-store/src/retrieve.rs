//! Retrieval: embed the query, search the store, map payloads to chunks.

use crate::errors::StoreError;
use crate::qdrant_facade::ChunkStore;
use crate::record::RetrievedChunk;

use llm_service::TextEmbedder;
use tracing::trace;

/// Embeds the query text and returns the `top_k` most similar chunks in
/// store-ranked order.
///
/// # Errors
/// Returns embedding failures as [`StoreError::Embed`] and client failures
/// as [`StoreError::Qdrant`].
pub async fn retrieve_top_chunks(
    store: &ChunkStore,
    embedder: &dyn TextEmbedder,
    query: &str,
    top_k: u64,
) -> Result<Vec<RetrievedChunk>, StoreError> {
    trace!("retrieve_top_chunks top_k={top_k}");

    let query_vector = embedder.embed(query).await?;
    let hits = store.search(query_vector, top_k).await?;

    let out = hits
        .into_iter()
        .map(|(score, payload)| chunk_from_payload(score, &payload))
        .collect::<Vec<_>>();

    trace!("retrieve_top_chunks hits={}", out.len());
    Ok(out)
}

/// Maps one `(score, payload)` hit to a [`RetrievedChunk`].
///
/// Missing payload fields degrade to empty/zero values instead of failing
/// the whole retrieval.
fn chunk_from_payload(score: f32, payload: &serde_json::Value) -> RetrievedChunk {
    let doc_path = payload
        .get("doc_path")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let chunk_id = payload
        .get("chunk_id")
        .and_then(|v| v.as_u64())
        .unwrap_or_default() as u32;
    let chunk_text = payload
        .get("chunk_text")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    RetrievedChunk {
        doc_path,
        chunk_id,
        chunk_text,
        distance: score,
    }
}
