use std::{str::FromStr, time::Duration};

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::{debug, info};

use crate::config::AppConfig;

/// Accounts inserted on first boot: (username, password, role).
const SEED_USERS: [(&str, &str, &str); 4] = [
    ("admin", "admin", "admin"),
    ("teofilo", "teofilo", "user"),
    ("daxton", "daxton", "user"),
    ("faith", "faith", "user"),
];

pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .context("parse DATABASE_URL")?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let db = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Creates the schema if it is missing and seeds the user table when empty.
/// Safe to run on every start.
pub async fn bootstrap(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("apply migrations")?;
    let seeded = seed_users(db).await.context("seed users")?;
    if seeded > 0 {
        info!(count = seeded, "seeded default users");
    } else {
        debug!("users already present, skipping seed");
    }
    Ok(())
}

async fn seed_users(db: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = db.begin().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        tx.rollback().await?;
        return Ok(0);
    }

    for (username, password, role) in SEED_USERS {
        sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(username)
            .bind(password)
            .bind(role)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(SEED_USERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite")
    }

    #[tokio::test]
    async fn bootstrap_creates_tables_and_seeds_users() {
        let db = memory_pool().await;
        bootstrap(&db).await.expect("bootstrap");

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(users, 4);

        for table in ["products", "purchases_lettuce", "purchases_other"] {
            let rows: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&db)
                .await
                .unwrap();
            assert_eq!(rows, 0, "{table} should start empty");
        }
    }

    #[tokio::test]
    async fn bootstrap_twice_does_not_reseed() {
        let db = memory_pool().await;
        bootstrap(&db).await.expect("first bootstrap");
        bootstrap(&db).await.expect("second bootstrap");

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(users, 4);
    }

    #[tokio::test]
    async fn seed_skipped_when_users_exist() {
        let db = memory_pool().await;
        sqlx::migrate!("./migrations").run(&db).await.unwrap();
        sqlx::query("INSERT INTO users (username, password, role) VALUES ('solo', 'pw', 'user')")
            .execute(&db)
            .await
            .unwrap();

        assert_eq!(seed_users(&db).await.unwrap(), 0);
        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(users, 1);
    }

    #[tokio::test]
    async fn stock_cannot_go_negative_at_the_schema_level() {
        let db = memory_pool().await;
        bootstrap(&db).await.unwrap();
        sqlx::query("INSERT INTO products (grams, price, quantity) VALUES (100, 5.0, 1)")
            .execute(&db)
            .await
            .unwrap();

        let err = sqlx::query("UPDATE products SET quantity = quantity - 2 WHERE grams = 100")
            .execute(&db)
            .await;
        assert!(err.is_err());
    }
}
