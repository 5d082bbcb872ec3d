//! Inventory ledger: records a sale and takes it off the stock as one unit.
//!
//! The stock check runs as a plain read before the transaction opens, which
//! gives callers ordered errors (unknown product before short stock). Two
//! purchases can both pass that check, so the decrement itself is conditional
//! on `quantity >= requested`; when it changes no rows the whole transaction is
//! rolled back and reported as insufficient stock. Stock therefore never goes
//! negative, and no record survives without its deduction.

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::products::repo_types::Product;
use crate::purchases::repo::{decrement_stock_tx, insert_purchase_tx, stock_tx};
use crate::purchases::repo_types::{Channel, NewPurchase};

pub async fn record_purchase(
    db: &SqlitePool,
    channel: Channel,
    purchase: &NewPurchase,
) -> AppResult<i64> {
    let product = Product::find_by_grams(db, purchase.grams)
        .await?
        .ok_or(AppError::ProductNotFound)?;
    if product.quantity < purchase.quantity {
        return Err(AppError::InsufficientStock {
            available: product.quantity,
        });
    }

    let mut tx = db.begin().await?;

    let id = match insert_purchase_tx(&mut tx, channel, purchase).await {
        Ok(id) => id,
        Err(e) => {
            error!(error = %e, %channel, "insert purchase failed");
            rollback(tx, channel).await;
            return Err(e.into());
        }
    };

    match decrement_stock_tx(&mut tx, purchase.grams, purchase.quantity).await {
        Ok(0) => {
            let available = match stock_tx(&mut tx, purchase.grams).await {
                Ok(stock) => stock,
                Err(e) => {
                    rollback(tx, channel).await;
                    return Err(e.into());
                }
            };
            rollback(tx, channel).await;
            warn!(%channel, grams = purchase.grams, ?available, "stock drained before commit");
            return Err(match available {
                Some(available) => AppError::InsufficientStock { available },
                None => AppError::ProductNotFound,
            });
        }
        Ok(_) => {}
        Err(e) => {
            error!(error = %e, %channel, "decrement stock failed");
            rollback(tx, channel).await;
            return Err(e.into());
        }
    }

    tx.commit().await?;
    info!(
        %channel,
        id,
        grams = purchase.grams,
        quantity = purchase.quantity,
        "purchase recorded"
    );
    Ok(id)
}

async fn rollback(tx: Transaction<'_, Sqlite>, channel: Channel) {
    if let Err(e) = tx.rollback().await {
        error!(error = %e, %channel, "rollback failed");
    }
}
