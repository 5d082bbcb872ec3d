//! Loosely-typed request fields.
//!
//! Clients send numbers either as JSON numbers or as numeric strings, and treat
//! `0`, `""`, `false` and `null` as "not provided". Request DTOs keep raw
//! [`Value`]s and go through these helpers before anything touches storage.

use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Returns the value only if it counts as provided.
pub fn present(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

/// Looser than [`present`] for fields that get their own range check: only
/// absent, `null` and `""` count as missing, so `0` reaches that check.
pub fn provided(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !matches!(v, Value::Null) && v.as_str() != Some(""))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A purchase or stock quantity: a whole number, at least 1.
pub fn quantity(value: &Value) -> AppResult<i64> {
    match integer_of(value) {
        Some(q) if q >= 1 => Ok(q),
        _ => Err(AppError::InvalidQuantity),
    }
}

pub fn integer(value: &Value, field: &'static str) -> AppResult<i64> {
    integer_of(value).ok_or(AppError::InvalidField { field })
}

pub fn number(value: &Value, field: &'static str) -> AppResult<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|f| f.is_finite())
        .ok_or(AppError::InvalidField { field })
}

pub fn text(value: &Value, field: &'static str) -> AppResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(AppError::InvalidField { field }),
    }
}

fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
}

fn whole(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f <= i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}
