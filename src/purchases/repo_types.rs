use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

/// Sales channel. Each channel has its own purchase log with identical structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Lettuce,
    Other,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Lettuce, Channel::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Lettuce => "lettuce",
            Channel::Other => "other",
        }
    }

    /// Table holding this channel's purchase log.
    pub fn table(self) -> &'static str {
        match self {
            Channel::Lettuce => "purchases_lettuce",
            Channel::Other => "purchases_other",
        }
    }

    /// HTTP path serving this channel's log.
    pub fn path(self) -> &'static str {
        match self {
            Channel::Lettuce => "/purchases_lettuce",
            Channel::Other => "/purchases_other",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed sale. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PurchaseRecord {
    pub id: i64,
    pub grams: i64,
    pub quantity: i64,
    #[serde(rename = "totalCost")]
    #[sqlx(rename = "totalCost")]
    pub total_cost: f64,
    #[serde(rename = "purchaseDate")]
    #[sqlx(rename = "purchaseDate")]
    pub purchase_date: String, // as supplied by the caller, format unchecked
}

/// Validated purchase request, ready for the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchase {
    pub grams: i64,
    pub quantity: i64,
    pub total_cost: f64,
    pub purchase_date: String,
}
