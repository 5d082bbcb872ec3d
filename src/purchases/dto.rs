use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::fields;
use crate::purchases::repo_types::NewPurchase;

/// Body of `POST /purchases_<channel>`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub grams: Option<Value>,
    pub quantity: Option<Value>,
    pub total_cost: Option<Value>,
    pub purchase_date: Option<Value>,
}

impl PurchaseRequest {
    /// Presence first, then quantity, then the remaining fields. No storage access.
    pub fn validate(self) -> AppResult<NewPurchase> {
        let (Some(grams), Some(quantity), Some(total_cost), Some(purchase_date)) = (
            fields::present(self.grams),
            fields::provided(self.quantity),
            fields::present(self.total_cost),
            fields::present(self.purchase_date),
        ) else {
            return Err(AppError::MissingFields);
        };

        let quantity = fields::quantity(&quantity)?;
        Ok(NewPurchase {
            grams: fields::integer(&grams, "grams")?,
            quantity,
            total_cost: fields::number(&total_cost, "totalCost")?,
            purchase_date: fields::text(&purchase_date, "purchaseDate")?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PurchaseCreated {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> PurchaseRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn validate_reads_camel_case_fields() {
        let purchase = request(json!({
            "grams": 100,
            "quantity": "3",
            "totalCost": 15.0,
            "purchaseDate": "2024-01-01"
        }))
        .validate()
        .unwrap();
        assert_eq!(
            purchase,
            NewPurchase {
                grams: 100,
                quantity: 3,
                total_cost: 15.0,
                purchase_date: "2024-01-01".into()
            }
        );
    }

    #[test]
    fn missing_fields_win_over_bad_quantity() {
        let err = request(json!({ "grams": 100, "quantity": -1, "totalCost": 15.0 }))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::MissingFields));
    }

    #[test]
    fn absent_quantity_is_missing() {
        for q in [json!(null), json!("")] {
            let err = request(json!({
                "grams": 100, "quantity": q, "totalCost": 15.0, "purchaseDate": "2024-01-01"
            }))
            .validate()
            .unwrap_err();
            assert!(matches!(err, AppError::MissingFields), "{q}");
        }
    }

    #[test]
    fn zero_negative_or_non_numeric_quantity_is_invalid() {
        for q in [json!(0), json!(-2), json!("two"), json!("0"), json!(2.5)] {
            let err = request(json!({
                "grams": 100, "quantity": q, "totalCost": 15.0, "purchaseDate": "2024-01-01"
            }))
            .validate()
            .unwrap_err();
            assert!(matches!(err, AppError::InvalidQuantity), "{q}");
        }
    }
}
