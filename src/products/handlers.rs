use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::AppResult,
    extract::AppJson,
    products::{
        dto::{ChangesResponse, CreatedResponse, ProductRequest},
        repo_types::Product,
    },
    state::AppState,
};

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(add_product))
        .route("/products/:id", put(update_product))
}

#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = Product::list(&state.db).await?;
    Ok(Json(products))
}

#[instrument(skip(state, payload))]
pub async fn add_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductRequest>,
) -> AppResult<Json<CreatedResponse>> {
    let fields = payload.validate().inspect_err(|e| {
        warn!(error = %e, "add_product rejected");
    })?;

    let id = Product::create(&state.db, &fields).await?;
    info!(id, grams = fields.grams, quantity = fields.quantity, "product added");
    Ok(Json(CreatedResponse { id }))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<ProductRequest>,
) -> AppResult<Json<ChangesResponse>> {
    let fields = payload.validate().inspect_err(|e| {
        warn!(error = %e, id, "update_product rejected");
    })?;

    let changes = Product::update(&state.db, id, &fields).await?;
    if changes == 0 {
        warn!(id, "update_product matched no rows");
    } else {
        info!(id, grams = fields.grams, quantity = fields.quantity, "product updated");
    }
    Ok(Json(ChangesResponse { changes }))
}
