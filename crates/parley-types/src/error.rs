use thiserror::Error;

use crate::llm::LlmError;

/// Errors surfaced by the conversation orchestrator.
///
/// Every failure of a `/chat` exchange is translated into exactly one of
/// these before it reaches the HTTP layer.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Malformed or unacceptable client input. No session mutation happened.
    #[error("validation error: {0}")]
    Validation(String),

    /// The completion endpoint could not be reached, answered non-2xx, or
    /// timed out. The user turn stays in the transcript.
    #[error("upstream transport error: {0}")]
    UpstreamTransport(String),

    /// The completion endpoint answered but the payload lacked the expected
    /// fields.
    #[error("upstream response error: {0}")]
    UpstreamShape(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<LlmError> for ChatError {
    fn from(e: LlmError) -> Self {
        if e.is_transport() {
            ChatError::UpstreamTransport(e.to_string())
        } else {
            ChatError::UpstreamShape(e.to_string())
        }
    }
}

/// Errors from session store operations (used by the trait in parley-core).
///
/// The in-memory store never fails; shared external stores can.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for ChatError {
    fn from(e: StoreError) -> Self {
        ChatError::Internal(e.to_string())
    }
}

/// Errors from loading service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("missing API credential: environment variable '{0}' is not set")]
    MissingCredential(String),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_llm_timeout_maps_to_transport() {
        let err: ChatError = LlmError::Timeout(Duration::from_secs(15)).into();
        match err {
            ChatError::UpstreamTransport(msg) => assert_eq!(msg, "request timed out after 15s"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_llm_shape_maps_to_upstream_shape() {
        let err: ChatError = LlmError::UnexpectedResponse("missing choices".into()).into();
        assert!(matches!(err, ChatError::UpstreamShape(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingCredential("KLUSTER_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "missing API credential: environment variable 'KLUSTER_API_KEY' is not set"
        );
    }
}
