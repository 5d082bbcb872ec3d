use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Quantity must be a whole number of at least 1")]
    InvalidQuantity,

    #[error("Invalid value for {field}")]
    InvalidField { field: &'static str },

    #[error("Product not found")]
    ProductNotFound,

    #[error("Insufficient stock")]
    InsufficientStock { available: i64 },

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid role")]
    InvalidRole,

    #[error("Database error: {0}")]
    StorageError(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields
            | AppError::MalformedPayload
            | AppError::InvalidQuantity
            | AppError::InvalidField { .. }
            | AppError::InsufficientStock { .. }
            | AppError::InvalidRole => StatusCode::BAD_REQUEST,
            AppError::ProductNotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateUsername => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::StorageError(e) = &self {
            error!(error = %e, "storage error");
        }

        let body = match &self {
            AppError::InsufficientStock { available } => {
                json!({ "error": self.to_string(), "available": available })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// A body that is absent, not JSON-typed, or not an object carries none of the
/// required fields. Only unparseable JSON is reported as malformed.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) | JsonRejection::JsonDataError(_) => {
                AppError::MissingFields
            }
            _ => AppError::MalformedPayload,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
