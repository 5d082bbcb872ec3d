use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::fields;
use crate::products::repo_types::ProductFields;

/// Body of `POST /products` and `PUT /products/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    pub grams: Option<Value>,
    pub price: Option<Value>,
    pub quantity: Option<Value>,
}

impl ProductRequest {
    pub fn validate(self) -> AppResult<ProductFields> {
        let (Some(grams), Some(price), Some(quantity)) = (
            fields::present(self.grams),
            fields::present(self.price),
            fields::present(self.quantity),
        ) else {
            return Err(AppError::MissingFields);
        };

        Ok(ProductFields {
            grams: fields::integer(&grams, "grams")?,
            price: fields::number(&price, "price")?,
            quantity: fields::quantity(&quantity)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub changes: u64,
}
