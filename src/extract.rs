use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections reported through [`AppError`], so a bad body
/// gets the same `{ "error": ... }` shape as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
