use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::auth::dto::NewUser;
use crate::auth::repo_types::User;
use crate::error::{AppError, AppResult};

/// Returns the matched user's role.
pub async fn login(db: &SqlitePool, username: &str, password: &str) -> AppResult<String> {
    match User::find_by_credentials(db, username, password).await? {
        Some(user) => {
            info!(user_id = user.id, username = %user.username, "user logged in");
            Ok(user.role)
        }
        None => {
            warn!(%username, "login invalid credentials");
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Returns the new user's id. A taken username is reported as
/// [`AppError::DuplicateUsername`], never as a generic storage failure.
pub async fn register(db: &SqlitePool, user: &NewUser) -> AppResult<i64> {
    match User::create(db, user).await {
        Ok(id) => {
            info!(user_id = id, username = %user.username, role = user.role.as_str(), "user registered");
            Ok(id)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!(username = %user.username, "username already registered");
            Err(AppError::DuplicateUsername)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::Role;
    use crate::state::AppState;

    fn new_user(username: &str, password: &str, role: Role) -> NewUser {
        NewUser {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    #[tokio::test]
    async fn seeded_accounts_can_log_in() {
        let state = AppState::for_tests().await;
        assert_eq!(login(&state.db, "admin", "admin").await.unwrap(), "admin");
        assert_eq!(login(&state.db, "faith", "faith").await.unwrap(), "user");
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let state = AppState::for_tests().await;
        let err = login(&state.db, "admin", "hunter2").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn comparison_is_case_sensitive() {
        let state = AppState::for_tests().await;
        assert!(matches!(
            login(&state.db, "Admin", "admin").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&state.db, "admin", "ADMIN").await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn register_then_login() {
        let state = AppState::for_tests().await;
        let id = register(&state.db, &new_user("newbie", "s3cret", Role::User))
            .await
            .unwrap();
        assert!(id > 0);
        assert_eq!(login(&state.db, "newbie", "s3cret").await.unwrap(), "user");
    }

    #[tokio::test]
    async fn duplicate_username_leaves_storage_unchanged() {
        let state = AppState::for_tests().await;
        let before = User::count(&state.db).await.unwrap();

        let err = register(&state.db, &new_user("admin", "other", Role::User))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername));
        assert_eq!(User::count(&state.db).await.unwrap(), before);
        // The original account is untouched.
        assert_eq!(login(&state.db, "admin", "admin").await.unwrap(), "admin");
    }
}
