use sqlx::SqlitePool;

use crate::products::repo_types::{Product, ProductFields};

impl Product {
    pub async fn list(db: &SqlitePool) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, grams, price, quantity FROM products")
            .fetch_all(db)
            .await
    }

    pub async fn find_by_grams(db: &SqlitePool, grams: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, grams, price, quantity
            FROM products
            WHERE grams = ?
            "#,
        )
        .bind(grams)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &SqlitePool, fields: &ProductFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO products (grams, price, quantity)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(fields.grams)
        .bind(fields.price)
        .bind(fields.quantity)
        .fetch_one(db)
        .await
    }

    /// Replaces grams, price and quantity. Returns the number of rows changed.
    pub async fn update(db: &SqlitePool, id: i64, fields: &ProductFields) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET grams = ?, price = ?, quantity = ?
            WHERE id = ?
            "#,
        )
        .bind(fields.grams)
        .bind(fields.price)
        .bind(fields.quantity)
        .bind(id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
