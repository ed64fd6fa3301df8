//! POST /announce — drafts one constrained social-media post.

use std::sync::Arc;

use axum::{Json, extract::State};
use guarded_chat::generate_announcement;
use serde::{Deserialize, Serialize};

use crate::core::app_state::AppState;
use crate::error_handler::AppResult;

#[derive(Debug, Deserialize)]
pub struct AnnounceRequest {
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct AnnounceResponse {
    /// The post text: at most 200 characters, always carrying the
    /// "Check for updates" phrase.
    pub post: String,
}

/// Handler: POST /announce
pub async fn announce(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnnounceRequest>,
) -> AppResult<Json<AnnounceResponse>> {
    let post = generate_announcement(state.model.as_ref(), &body.topic).await?;

    Ok(Json(AnnounceResponse { post }))
}
