use axum::{extract::State, routing::get, Json, Router};
use tracing::{instrument, warn};

use crate::{
    error::AppResult,
    extract::AppJson,
    purchases::{
        dto::{PurchaseCreated, PurchaseRequest},
        repo_types::{Channel, PurchaseRecord},
        services::record_purchase,
    },
    state::AppState,
};

/// One GET/POST pair per channel, all served by the same handlers.
pub fn purchase_routes() -> Router<AppState> {
    Channel::ALL
        .into_iter()
        .fold(Router::new(), |router, channel| {
            router.route(
                channel.path(),
                get(move |state| list_purchases(state, channel))
                    .post(move |state, payload| create_purchase(state, channel, payload)),
            )
        })
}

#[instrument(skip(state))]
pub async fn list_purchases(
    State(state): State<AppState>,
    channel: Channel,
) -> AppResult<Json<Vec<PurchaseRecord>>> {
    let records = PurchaseRecord::list(&state.db, channel).await?;
    Ok(Json(records))
}

#[instrument(skip(state, payload))]
pub async fn create_purchase(
    State(state): State<AppState>,
    channel: Channel,
    AppJson(payload): AppJson<PurchaseRequest>,
) -> AppResult<Json<PurchaseCreated>> {
    let purchase = payload.validate().inspect_err(|e| {
        warn!(error = %e, %channel, "purchase rejected");
    })?;

    let id = record_purchase(&state.db, channel, &purchase)
        .await
        .inspect_err(|e| {
            warn!(error = %e, %channel, grams = purchase.grams, "purchase failed");
        })?;
    Ok(Json(PurchaseCreated { id }))
}
