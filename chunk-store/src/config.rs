//! Store connection configuration.

use crate::errors::StoreError;

/// Configuration for the retrieval side of the content store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Qdrant HTTP endpoint, e.g. `http://127.0.0.1:6333`.
    pub qdrant_url: String,
    /// Optional API key for Qdrant Cloud.
    pub qdrant_api_key: Option<String>,
    /// Target collection name.
    pub collection: String,
}

impl StoreConfig {
    /// Loads the store configuration from environment variables.
    ///
    /// `RAG_COLLECTION` is required; `QDRANT_URL` defaults to the local
    /// endpoint and `QDRANT_API_KEY` stays optional.
    ///
    /// # Errors
    /// Returns [`StoreError::Config`] when `RAG_COLLECTION` is missing or
    /// empty.
    pub fn from_env() -> Result<Self, StoreError> {
        let collection = match std::env::var("RAG_COLLECTION") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => {
                return Err(StoreError::Config(
                    "RAG_COLLECTION env var not set (vector-store collection name)".into(),
                ));
            }
        };

        let qdrant_url = std::env::var("QDRANT_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "http://127.0.0.1:6333".to_string());

        Ok(Self {
            qdrant_url,
            qdrant_api_key: std::env::var("QDRANT_API_KEY").ok(),
            collection,
        })
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.qdrant_url.trim().is_empty() {
            return Err(StoreError::Config("qdrant_url is empty".into()));
        }
        if self.collection.trim().is_empty() {
            return Err(StoreError::Config("collection is empty".into()));
        }
        Ok(())
    }
}
