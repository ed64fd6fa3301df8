//! Lightweight Vertex client for text generation and embeddings.
//!
//! This module implements a thin REST client for a Vertex-hosted model
//! endpoint:
//! - `POST .../models/{model}:generateContent` — synchronous text generation
//! - `POST .../models/{embed_model}:predict`   — embeddings retrieval
//!
//! It is configured once via [`VertexConfig`] and reuses one HTTP client
//! with a configurable timeout. Authentication is a bearer token supplied
//! at startup.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::gen_config::GenerationConfig;
use crate::config::vertex_config::VertexConfig;
use crate::error_handler::{LlmError, Result};
use crate::generation::{GenerativeModel, TextEmbedder};
use crate::response::GenerateContentResponse;

/// Thin client for the Vertex REST API.
///
/// Construct once at process start, wrap in `Arc`, and share. Provides two
/// high-level calls:
/// - [`VertexService::generate_content`] — synchronous text generation
/// - [`VertexService::embed`]            — embeddings retrieval
pub struct VertexService {
    client: reqwest::Client,
    cfg: VertexConfig,
    url_generate: String,
    url_embed: String,
}

impl VertexService {
    /// Creates a new [`VertexService`] from the given config.
    ///
    /// # Errors
    /// Returns [`LlmError::Transport`] if the HTTP client cannot be built.
    pub fn new(cfg: VertexConfig) -> Result<Self> {
        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let base = format!(
            "https://{loc}-aiplatform.googleapis.com/v1/projects/{proj}/locations/{loc}/publishers/google/models",
            loc = cfg.location,
            proj = cfg.project_id,
        );
        let url_generate = format!("{}/{}:generateContent", base, cfg.model);
        let url_embed = format!("{}/{}:predict", base, cfg.embed_model);

        Ok(Self {
            client,
            cfg,
            url_generate,
            url_embed,
        })
    }

    /// Performs one **non-streaming** generation request.
    ///
    /// Mapped options:
    /// - `temperature`     ← `config.temperature`
    /// - `topP`            ← `config.top_p`
    /// - `maxOutputTokens` ← `config.max_output_tokens`
    ///
    /// # Errors
    /// - [`LlmError::HttpStatus`] for non-2xx responses
    /// - [`LlmError::Transport`] for client errors
    /// - [`LlmError::Decode`] if the response cannot be parsed
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate_content(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerateContentResponse> {
        let body = GenerateRequest::new(prompt, config);

        debug!("POST {}", self.url_generate);
        let resp = self
            .client
            .post(&self.url_generate)
            .bearer_auth(&self.cfg.access_token)
            .json(&body)
            .send()
            .await?;

        let resp = check_status(resp, &self.url_generate).await?;

        resp.json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::Decode(format!("serde error: {e}")))
    }

    /// Retrieves an embedding vector for `input`.
    ///
    /// # Errors
    /// - [`LlmError::HttpStatus`] for non-2xx responses
    /// - [`LlmError::Transport`] for client errors
    /// - [`LlmError::Decode`] if the response carries no embedding values
    #[instrument(skip_all, fields(model = %self.cfg.embed_model))]
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>> {
        let body = PredictRequest {
            instances: vec![PredictInstance { content: input }],
        };

        debug!("POST {}", self.url_embed);
        let resp = self
            .client
            .post(&self.url_embed)
            .bearer_auth(&self.cfg.access_token)
            .json(&body)
            .send()
            .await?;

        let resp = check_status(resp, &self.url_embed).await?;

        let out: PredictResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Decode(format!("serde error: {e}")))?;

        out.predictions
            .into_iter()
            .next()
            .map(|p| p.embeddings.values)
            .ok_or_else(|| LlmError::Decode("no predictions in embedding response".to_string()))
    }
}

/// Maps a non-2xx response to [`LlmError::HttpStatus`] with a body snippet.
async fn check_status(resp: Response, url: &str) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let snippet = text.chars().take(240).collect::<String>();
    Err(LlmError::HttpStatus {
        status,
        url: url.to_string(),
        snippet,
    })
}

#[async_trait]
impl GenerativeModel for VertexService {
    async fn generate_content(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerateContentResponse> {
        VertexService::generate_content(self, prompt, config).await
    }
}

#[async_trait]
impl TextEmbedder for VertexService {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        VertexService::embed(self, text).await
    }
}

/* ==========================
HTTP payloads
========================== */

/// Request body for `:generateContent` (non-streaming).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: RequestGenerationConfig,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str, config: &GenerationConfig) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: RequestGenerationConfig {
                temperature: config.temperature,
                top_p: config.top_p,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Subset of `generationConfig` the service sets.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Request body for `:predict` (embeddings).
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
}

#[derive(Debug, Serialize)]
struct PredictInstance<'a> {
    content: &'a str,
}

/// Response body for `:predict`.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    embeddings: EmbeddingValues,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}
