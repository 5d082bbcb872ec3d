use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::purchases::repo_types::{Channel, NewPurchase, PurchaseRecord};

impl PurchaseRecord {
    pub async fn list(db: &SqlitePool, channel: Channel) -> Result<Vec<PurchaseRecord>, sqlx::Error> {
        let sql = format!(
            "SELECT id, grams, quantity, totalCost, purchaseDate FROM {}",
            channel.table()
        );
        sqlx::query_as::<_, PurchaseRecord>(&sql).fetch_all(db).await
    }
}

/// Append a record to the channel's log within a transaction.
pub async fn insert_purchase_tx(
    tx: &mut Transaction<'_, Sqlite>,
    channel: Channel,
    purchase: &NewPurchase,
) -> Result<i64, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO {} (grams, quantity, totalCost, purchaseDate)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
        channel.table()
    );
    sqlx::query_scalar(&sql)
        .bind(purchase.grams)
        .bind(purchase.quantity)
        .bind(purchase.total_cost)
        .bind(&purchase.purchase_date)
        .fetch_one(&mut **tx)
        .await
}

/// Take `quantity` units off the product's stock, only if that much is on hand.
/// Returns the number of rows changed: 0 means the stock was short.
pub async fn decrement_stock_tx(
    tx: &mut Transaction<'_, Sqlite>,
    grams: i64,
    quantity: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET quantity = quantity - ?
        WHERE grams = ? AND quantity >= ?
        "#,
    )
    .bind(quantity)
    .bind(grams)
    .bind(quantity)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected())
}

/// Current stock as seen inside the transaction.
pub async fn stock_tx(
    tx: &mut Transaction<'_, Sqlite>,
    grams: i64,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT quantity FROM products WHERE grams = ?")
        .bind(grams)
        .fetch_optional(&mut **tx)
        .await
}
