//! LLM request/response types for Parley.
//!
//! These types model the data shapes exchanged with the remote completion
//! endpoint: the request built from a session transcript, the normalized
//! response, token usage, and the provider error taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::chat::Turn;

/// Role of a message in an LLM conversation.
///
/// Closed set: no other roles ever appear in a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Turn>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Response from an LLM provider, reduced to the first candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: Option<String>,
    /// Raw text of the first choice, before any normalization.
    pub content: String,
    pub model: Option<String>,
    pub usage: Option<Usage>,
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl LlmError {
    /// Whether the failure happened while reaching the provider (network,
    /// non-2xx, timeout) as opposed to a malformed successful response.
    pub fn is_transport(&self) -> bool {
        !matches!(self, LlmError::UnexpectedResponse(_))
    }
}
