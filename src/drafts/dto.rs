use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::drafts::PurchaseDraft;
use crate::error::{AppError, AppResult};
use crate::fields;

/// Body of `POST /purchase-details`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    pub grams: Option<Value>,
    pub quantity: Option<Value>,
    pub total_cost: Option<Value>,
}

impl DraftRequest {
    /// Checks presence and quantity; the stored draft keeps the raw values.
    pub fn validate(self) -> AppResult<PurchaseDraft> {
        let (Some(grams), Some(quantity), Some(total_cost)) = (
            fields::present(self.grams),
            fields::provided(self.quantity),
            fields::present(self.total_cost),
        ) else {
            return Err(AppError::MissingFields);
        };

        fields::quantity(&quantity)?;
        Ok(PurchaseDraft {
            grams,
            quantity,
            total_cost,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
