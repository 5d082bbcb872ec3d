use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db;
use crate::drafts::DraftSlot;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    /// Process-wide pending purchase, shared by every caller.
    pub drafts: DraftSlot,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config).await?;
        db::bootstrap(&db).await?;
        Ok(Self::from_parts(db, config))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self {
            db,
            config,
            drafts: DraftSlot::default(),
        }
    }

    /// Fresh in-memory database with the schema applied and users seeded.
    #[cfg(test)]
    pub async fn for_tests() -> Self {
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            host: "127.0.0.1".into(),
            port: 0,
        });

        // One connection that never recycles: each in-memory connection is its own database.
        let db = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&config.database_url)
            .await
            .expect("in-memory sqlite");
        db::bootstrap(&db).await.expect("bootstrap test database");

        Self::from_parts(db, config)
    }
}
