//! HTTP request handlers.
//!
//! Bodies are parsed as JSON regardless of `Content-Type`, so clients that
//! post plain text with a JSON payload still work.

pub mod chat;
pub mod health;
pub mod session;

use serde_json::Value;

use crate::http::error::AppError;

/// Parse a request body as JSON. `None` for empty or non-JSON bodies.
fn parse_body(body: &[u8]) -> Option<Value> {
    serde_json::from_slice(body).ok()
}

/// Read an optional string field. Absent and `null` both mean `None`.
fn string_field<'a>(payload: &'a Value, name: &str) -> Result<Option<&'a str>, AppError> {
    match payload.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(AppError::Validation(format!("'{name}' must be a string"))),
    }
}
