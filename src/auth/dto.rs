use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::repo_types::Role;
use crate::error::{AppError, AppResult};
use crate::fields;

/// Request body for login.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

impl LoginRequest {
    pub fn validate(self) -> AppResult<(String, String)> {
        let (Some(username), Some(password)) =
            (fields::present(self.username), fields::present(self.password))
        else {
            return Err(AppError::MissingFields);
        };
        Ok((
            fields::text(&username, "username")?,
            fields::text(&password, "password")?,
        ))
    }
}

/// Request body for user registration.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<Value>,
    pub password: Option<Value>,
    pub role: Option<Value>,
}

/// Validated registration.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    pub fn validate(self) -> AppResult<NewUser> {
        let (Some(username), Some(password), Some(role)) = (
            fields::present(self.username),
            fields::present(self.password),
            fields::present(self.role),
        ) else {
            return Err(AppError::MissingFields);
        };

        let role = role
            .as_str()
            .and_then(Role::parse)
            .ok_or(AppError::InvalidRole)?;
        Ok(NewUser {
            username: fields::text(&username, "username")?,
            password: fields::text(&password, "password")?,
            role,
        })
    }
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_requires_both_fields() {
        let req: LoginRequest = serde_json::from_value(json!({ "username": "admin" })).unwrap();
        assert!(matches!(req.validate(), Err(AppError::MissingFields)));

        let req: LoginRequest =
            serde_json::from_value(json!({ "username": "admin", "password": "" })).unwrap();
        assert!(matches!(req.validate(), Err(AppError::MissingFields)));
    }

    #[test]
    fn register_checks_presence_before_role() {
        let req: RegisterRequest =
            serde_json::from_value(json!({ "username": "u", "role": "wizard" })).unwrap();
        assert!(matches!(req.validate(), Err(AppError::MissingFields)));

        let req: RegisterRequest = serde_json::from_value(
            json!({ "username": "u", "password": "p", "role": "wizard" }),
        )
        .unwrap();
        assert!(matches!(req.validate(), Err(AppError::InvalidRole)));
    }

    #[test]
    fn register_accepts_known_roles() {
        let req: RegisterRequest = serde_json::from_value(
            json!({ "username": "newbie", "password": "pw", "role": "admin" }),
        )
        .unwrap();
        assert_eq!(
            req.validate().unwrap(),
            NewUser {
                username: "newbie".into(),
                password: "pw".into(),
                role: Role::Admin
            }
        );
    }
}
