//! Application error type mapping to HTTP status codes.
//!
//! Every error body is `{"error": <message>}`, plus `"details"` for upstream
//! transport failures. Upstream response bodies never reach the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parley_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Bad client input.
    Validation(String),
    /// The completion endpoint could not be reached, failed, or timed out.
    Upstream(String),
    /// The completion endpoint answered with an unusable payload.
    UpstreamResponse(String),
    /// Generic internal error.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Validation(msg) => AppError::Validation(msg),
            ChatError::UpstreamTransport(msg) => AppError::Upstream(msg),
            ChatError::UpstreamShape(msg) => AppError::UpstreamResponse(msg),
            ChatError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Upstream(detail) => {
                tracing::error!(detail = %detail, "AI API request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to reach AI API".to_string(),
                    Some(detail),
                )
            }
            AppError::UpstreamResponse(detail) => {
                tracing::error!(detail = %detail, "unexpected model response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "unexpected model response".to_string(),
                    None,
                )
            }
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                    None,
                )
            }
        };

        let body = match details {
            Some(details) => json!({ "error": message, "details": details }),
            None => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_is_400_without_details() {
        let (status, body) = render(ChatError::Validation("message too short".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "message too short"}));
    }

    #[tokio::test]
    async fn transport_is_500_with_details() {
        let (status, body) = render(ChatError::UpstreamTransport("HTTP 503".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "failed to reach AI API");
        assert_eq!(body["details"], "HTTP 503");
    }

    #[tokio::test]
    async fn shape_is_500_without_details() {
        let (status, body) = render(ChatError::UpstreamShape("no choices".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "unexpected model response"}));
    }

    #[tokio::test]
    async fn internal_hides_detail() {
        let (status, body) = render(ChatError::Internal("store exploded".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "internal error"}));
    }
}
