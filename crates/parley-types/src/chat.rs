//! Conversation turn and session types for Parley.
//!
//! A session owns an ordered transcript of turns plus a last-activity
//! timestamp. Once a transcript is non-empty its first element is always the
//! system instruction turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export MessageRole from llm module (it's used in both chat and llm contexts).
pub use crate::llm::MessageRole;

/// One message in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: MessageRole,
    pub content: String,
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Point-in-time copy of a session held by a session store.
///
/// Stores hand out snapshots rather than references so no lock is held by
/// the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: String,
    pub transcript: Vec<Turn>,
    pub last_active: DateTime<Utc>,
}

impl SessionSnapshot {
    /// Number of turns currently in the transcript.
    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}

/// Successful result of one `/chat` exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        assert_eq!(Turn::system("s").role, MessageRole::System);
        assert_eq!(Turn::user("u").role, MessageRole::User);
        assert_eq!(Turn::assistant("a").role, MessageRole::Assistant);
    }

    #[test]
    fn test_turn_wire_shape() {
        let value = serde_json::to_value(Turn::user("hola")).unwrap();
        assert_eq!(value, serde_json::json!({"role": "user", "content": "hola"}));
    }
}
