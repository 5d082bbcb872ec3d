use axum::{extract::State, routing::post, Json, Router};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        services,
    },
    error::AppResult,
    extract::AppJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (username, password) = payload.validate().inspect_err(|e| {
        warn!(error = %e, "login rejected");
    })?;

    let role = services::login(&state.db, &username, &password).await?;
    Ok(Json(LoginResponse { role }))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    let user = payload.validate().inspect_err(|e| {
        warn!(error = %e, "register rejected");
    })?;

    let id = services::register(&state.db, &user).await?;
    Ok(Json(RegisterResponse {
        id,
        message: "User registered successfully",
    }))
}
