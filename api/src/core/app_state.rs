use std::sync::Arc;

use chat_log::JsonlChatLog;
use chunk_store::{ChunkStore, StoreConfig};
use guarded_chat::{GuardedChat, StoreRetriever};
use llm_service::{VertexConfig, VertexService};

use crate::error_handler::{AppError, AppResult};

/// Shared state for all HTTP handlers.
///
/// Clients are constructed once at process start and held for the process
/// lifetime; handlers only clone `Arc`s.
pub struct AppState {
    /// Orchestrator for the guarded chat pipeline.
    pub chat: GuardedChat,
    /// Model handle used directly by the classify/announce helpers.
    pub model: Arc<VertexService>,
}

impl AppState {
    /// Loads configuration from the environment and wires the clients.
    ///
    /// # Errors
    /// Fails startup when a required variable is missing or a client
    /// cannot be constructed.
    pub fn from_env() -> AppResult<Self> {
        let vertex_cfg =
            VertexConfig::from_env().map_err(|e| AppError::Startup(e.to_string()))?;
        let model = Arc::new(
            VertexService::new(vertex_cfg).map_err(|e| AppError::Startup(e.to_string()))?,
        );

        let store_cfg = StoreConfig::from_env().map_err(|e| AppError::Startup(e.to_string()))?;
        let store =
            ChunkStore::new(&store_cfg).map_err(|e| AppError::Startup(e.to_string()))?;
        let retriever = Arc::new(StoreRetriever::new(store, model.clone()));

        let log_path = match std::env::var("CHAT_LOG_PATH") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => return Err(AppError::MissingEnv("CHAT_LOG_PATH")),
        };
        let log = Arc::new(
            JsonlChatLog::new(&log_path).map_err(|e| AppError::Startup(e.to_string()))?,
        );

        let chat = GuardedChat::new(model.clone(), retriever, log);

        Ok(Self { chat, model })
    }
}
