//! Session management handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Value, json};

use super::{parse_body, string_field};
use crate::http::error::AppError;
use crate::state::AppState;

/// POST /reset - Delete a session. Unknown ids succeed.
///
/// The id is used exactly as supplied, without normalization.
pub async fn reset(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, AppError> {
    let payload = parse_body(&body).unwrap_or(Value::Null);
    let session_id = string_field(&payload, "session_id")?;

    let session_id = state.chat.reset(session_id).await?;
    Ok(Json(json!({
        "status": "session reset",
        "session_id": session_id,
    })))
}
