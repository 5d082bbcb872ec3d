use crate::auth::dto::NewUser;
use crate::auth::repo_types::User;
use sqlx::SqlitePool;

impl User {
    /// Find the user whose username and password both match exactly.
    ///
    /// Passwords are stored and compared as plain text, case-sensitive.
    pub async fn find_by_credentials(
        db: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, role
            FROM users
            WHERE username = ? AND password = ?
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user. A taken username fails with a unique violation.
    pub async fn create(db: &SqlitePool, user: &NewUser) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO users (username, password, role)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.role.as_str())
        .fetch_one(db)
        .await
    }

    #[cfg(test)]
    pub async fn count(db: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
    }
}
