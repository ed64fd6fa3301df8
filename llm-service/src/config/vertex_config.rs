//! Environment-driven configuration for the Vertex REST client.

use crate::error_handler::{Result, env_opt_u64, env_or, must_env};

/// Connection settings for the model-hosting service.
///
/// Loaded once at process start via [`VertexConfig::from_env`]; missing
/// required variables abort startup.
#[derive(Debug, Clone)]
pub struct VertexConfig {
    /// Cloud project that hosts the models.
    pub project_id: String,

    /// Region of the model endpoint (e.g., `us-central1`).
    pub location: String,

    /// Generative model name (e.g., `gemini-2.5-flash`).
    pub model: String,

    /// Embedding model name (e.g., `text-embedding-005`).
    pub embed_model: String,

    /// Bearer token for the REST API.
    pub access_token: String,

    /// Optional request timeout in seconds (default 60).
    pub timeout_secs: Option<u64>,
}

impl VertexConfig {
    /// Load the client configuration from environment variables.
    ///
    /// Required: `GOOGLE_CLOUD_PROJECT`, `VERTEX_ACCESS_TOKEN`.
    ///
    /// # Errors
    /// Returns a config error when a required variable is missing or a
    /// numeric variable fails to parse.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            project_id: must_env("GOOGLE_CLOUD_PROJECT")?,
            location: env_or("GOOGLE_CLOUD_LOCATION", "us-central1"),
            model: env_or("GEMINI_MODEL", "gemini-2.5-flash"),
            embed_model: env_or("EMBED_MODEL", "text-embedding-005"),
            access_token: must_env("VERTEX_ACCESS_TOKEN")?,
            timeout_secs: env_opt_u64("LLM_TIMEOUT_SECS")?,
        })
    }
}
