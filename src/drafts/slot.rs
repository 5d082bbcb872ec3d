use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

/// A purchase a client is about to confirm. Values are kept exactly as sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseDraft {
    pub grams: Value,
    pub quantity: Value,
    #[serde(rename = "totalCost")]
    pub total_cost: Value,
}

/// The single pending-purchase slot for the whole process.
///
/// There is exactly one slot, not one per user or session: every save replaces
/// whatever was there, and every read sees the latest save. It starts empty and
/// is never persisted. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct DraftSlot {
    inner: Arc<RwLock<Option<PurchaseDraft>>>,
}

impl DraftSlot {
    /// Replaces the current draft, returning the one it overwrote.
    pub async fn save(&self, draft: PurchaseDraft) -> Option<PurchaseDraft> {
        self.inner.write().await.replace(draft)
    }

    pub async fn read(&self) -> Option<PurchaseDraft> {
        self.inner.read().await.clone()
    }
}
