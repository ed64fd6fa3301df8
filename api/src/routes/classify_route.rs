//! POST /classify — maps a resident question to one fixed category.

use std::sync::Arc;

use axum::{Json, extract::State};
use guarded_chat::classify_question;
use serde::{Deserialize, Serialize};

use crate::core::app_state::AppState;
use crate::error_handler::AppResult;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// Exact label text, e.g. `"Tax Related"`.
    pub category: String,
}

/// Handler: POST /classify
///
/// An out-of-set model output surfaces as HTTP 500 rather than being
/// coerced to a default label.
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ClassifyRequest>,
) -> AppResult<Json<ClassifyResponse>> {
    let category = classify_question(state.model.as_ref(), &body.question).await?;

    Ok(Json(ClassifyResponse {
        category: category.as_str().to_string(),
    }))
}
