//! Chat endpoint handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use parley_core::chat::service::MISSING_MESSAGE;
use parley_types::chat::ChatReply;

use super::{parse_body, string_field};
use crate::http::error::AppError;
use crate::http::extractors::ClientIdentity;
use crate::state::AppState;

/// POST /chat - Run one exchange and return the assistant reply.
pub async fn chat(
    State(state): State<AppState>,
    ClientIdentity(identity): ClientIdentity,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let payload = parse_body(&body).ok_or_else(|| AppError::Validation(MISSING_MESSAGE.to_string()))?;
    let message = string_field(&payload, "message")
        .map_err(|_| AppError::Validation(MISSING_MESSAGE.to_string()))?;
    let session_hint = string_field(&payload, "session_id")?;

    let reply = state
        .chat
        .handle_chat(message, session_hint, &identity)
        .await?;
    Ok(Json(reply))
}
