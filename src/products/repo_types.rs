use serde::Serialize;
use sqlx::FromRow;

/// Catalog row. `grams` is the unit size and identifies the product for purchases.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub grams: i64,
    pub price: f64,
    pub quantity: i64, // stock on hand, never negative
}

/// Validated fields for an insert or a full update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub grams: i64,
    pub price: f64,
    pub quantity: i64,
}
