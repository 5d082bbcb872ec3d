mod dto;
pub mod handlers;
mod slot;

pub use slot::{DraftSlot, PurchaseDraft};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::draft_routes()
}
