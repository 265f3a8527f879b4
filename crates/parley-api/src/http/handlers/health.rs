//! Health and usage handlers.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde_json::{Value, json};

use crate::http::error::AppError;
use crate::state::AppState;

const USAGE_HTML: &str = r#"<h1>Parley chat API</h1>
<p>POST /chat with JSON {"message": "your question", "session_id": "optional"}</p>
<p>Example:<br>
curl -X POST http://localhost:5000/chat -H "Content-Type: application/json" -d '{"message":"¿Qué productos tienen?"}'
</p>
<p>To restart a conversation: POST /reset with JSON {"session_id": "your_session"}</p>
"#;

/// GET / - Human-readable usage text.
pub async fn index() -> Html<&'static str> {
    Html(USAGE_HTML)
}

/// GET /health - Liveness plus the current session count.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let sessions = state.chat.session_count().await?;
    Ok(Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": &*state.service_name,
        "sessions": sessions,
    })))
}
