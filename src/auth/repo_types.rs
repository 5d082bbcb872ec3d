use sqlx::FromRow;

/// User record in the database. The password column is only ever compared
/// in SQL, never loaded.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String, // unique
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}
