use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::{
    drafts::dto::{DraftRequest, MessageResponse},
    error::AppResult,
    extract::AppJson,
    state::AppState,
};

pub fn draft_routes() -> Router<AppState> {
    Router::new().route("/purchase-details", get(read_draft).post(save_draft))
}

#[instrument(skip(state, payload))]
pub async fn save_draft(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DraftRequest>,
) -> AppResult<Json<MessageResponse>> {
    let draft = payload.validate().inspect_err(|e| {
        warn!(error = %e, "draft rejected");
    })?;

    if state.drafts.save(draft).await.is_some() {
        debug!("previous draft overwritten");
    }
    Ok(Json(MessageResponse {
        message: "Purchase details saved",
    }))
}

/// Current draft, or `{}` if nothing has been saved since start.
#[instrument(skip(state))]
pub async fn read_draft(State(state): State<AppState>) -> Response {
    match state.drafts.read().await {
        Some(draft) => Json(draft).into_response(),
        None => Json(json!({})).into_response(),
    }
}
