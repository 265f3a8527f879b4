//! Conversation orchestrator implementing the `/chat` exchange.
//!
//! One exchange: validate and sanitize the message, resolve the session id,
//! sweep idle sessions, append the user turn, trim the transcript to its
//! window, call the completion provider once under a hard timeout, append
//! the normalized assistant reply, and trim again.
//!
//! No session lock is held across the provider call. Two concurrent
//! requests for one session are serialized only by the store's per-entry
//! atomicity, so their turns land in processing order.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use parley_types::chat::{ChatReply, SessionSnapshot, Turn};
use parley_types::config::ServiceConfig;
use parley_types::error::{ChatError, ConfigError};
use parley_types::llm::{CompletionRequest, LlmError};

use super::input::{normalize_reply, resolve_session_id, sanitize_message, MIN_MESSAGE_CHARS};
use crate::llm::provider::LlmProvider;
use crate::session::store::SessionStore;
use crate::session::window::TranscriptWindow;

/// Validation message for an absent message field or unparseable body.
pub const MISSING_MESSAGE: &str = "invalid JSON or missing 'message' field";

/// Validation message for a message that is too short after sanitization.
pub const MESSAGE_TOO_SHORT: &str = "message too short";

/// Validation message for a reset without a session id.
pub const MISSING_SESSION_ID: &str = "missing session_id";

/// Fixed per-exchange parameters.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Hard bound on one completion call.
    pub call_timeout: Duration,
    /// Sessions idle longer than this are swept.
    pub idle_timeout: Duration,
    pub window: TranscriptWindow,
}

impl ChatSettings {
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            model: config.model.model.clone(),
            max_tokens: config.model.max_tokens,
            temperature: config.model.temperature,
            call_timeout: Duration::from_secs(config.model.timeout_secs),
            idle_timeout: Duration::from_secs(config.session.idle_timeout_secs),
            window: TranscriptWindow::from_config(&config.session)?,
        })
    }
}

/// Implements the chat exchange protocol over a session store and a
/// completion provider.
///
/// Generic over `SessionStore` and `LlmProvider` so the core stays testable
/// without a network stack.
pub struct ChatOrchestrator<S: SessionStore, P: LlmProvider> {
    store: S,
    provider: P,
    system_prompt: Arc<str>,
    settings: ChatSettings,
}

impl<S: SessionStore, P: LlmProvider> ChatOrchestrator<S, P> {
    pub fn new(store: S, provider: P, system_prompt: impl Into<Arc<str>>, settings: ChatSettings) -> Self {
        Self {
            store,
            provider,
            system_prompt: system_prompt.into(),
            settings,
        }
    }

    /// Access the session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one `/chat` exchange.
    ///
    /// `message` is the raw client text (`None` when the field was absent),
    /// `session_hint` the optional client-supplied session id, and
    /// `client_identity` the originating address used to derive a default
    /// session when no hint is given.
    pub async fn handle_chat(
        &self,
        message: Option<&str>,
        session_hint: Option<&str>,
        client_identity: &str,
    ) -> Result<ChatReply, ChatError> {
        let raw = message.ok_or_else(|| ChatError::Validation(MISSING_MESSAGE.to_string()))?;
        let user_input = sanitize_message(raw);
        if user_input.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ChatError::Validation(MESSAGE_TOO_SHORT.to_string()));
        }

        let session_id = resolve_session_id(session_hint, client_identity);
        if session_hint.is_none() {
            debug!(client = %client_identity, session_id = %session_id, "derived default session");
        }

        self.sweep_expired().await?;

        self.store
            .get_or_create(&session_id, &self.system_prompt)
            .await?;
        self.store.touch(&session_id).await?;
        let snapshot = self
            .append_or_recreate(&session_id, Turn::user(user_input.clone()))
            .await?;
        info!(session_id = %session_id, turns = snapshot.len(), "user message recorded");

        // Unanswered user turns from failed exchanges accumulate, so the
        // window applies before every call, not only after a reply.
        self.store.trim(&session_id, &self.settings.window).await?;
        let mut messages = snapshot.transcript;
        self.settings.window.apply(&mut messages);

        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let started = Instant::now();
        let outcome = tokio::time::timeout(self.settings.call_timeout, self.provider.complete(&request))
            .await
            .unwrap_or_else(|_| Err(LlmError::Timeout(self.settings.call_timeout)));
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                error!(
                    session_id = %session_id,
                    provider = self.provider.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = ?e,
                    "completion failed"
                );
                return Err(e.into());
            }
        };
        info!(
            session_id = %session_id,
            provider = self.provider.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "completion received"
        );

        let reply = normalize_reply(&response.content);
        let appended = self
            .store
            .append(&session_id, Turn::assistant(reply.clone()))
            .await?;
        if appended.is_none() {
            // Reset or expired while the completion was in flight: the
            // exchange finished, so the conversation resumes from it.
            warn!(session_id = %session_id, "session removed during completion, restoring exchange");
            self.store
                .get_or_create(&session_id, &self.system_prompt)
                .await?;
            self.store.append(&session_id, Turn::user(user_input)).await?;
            self.store
                .append(&session_id, Turn::assistant(reply.clone()))
                .await?;
        }
        self.store.trim(&session_id, &self.settings.window).await?;

        Ok(ChatReply { reply, session_id })
    }

    /// Delete a session. Deleting an unknown id succeeds.
    pub async fn reset(&self, session_id: Option<&str>) -> Result<String, ChatError> {
        let id = session_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ChatError::Validation(MISSING_SESSION_ID.to_string()))?;
        let existed = self.store.delete(id).await?;
        info!(session_id = %id, existed, "session reset");
        Ok(id.to_string())
    }

    /// Remove sessions idle longer than the configured timeout.
    pub async fn sweep_expired(&self) -> Result<usize, ChatError> {
        let expired = self.store.sweep(self.settings.idle_timeout).await?;
        if expired > 0 {
            info!(expired, "expired sessions swept");
        }
        Ok(expired)
    }

    /// Number of live sessions, for health reporting.
    pub async fn session_count(&self) -> Result<usize, ChatError> {
        Ok(self.store.size().await?)
    }

    /// Current transcript of a session, if it exists.
    pub async fn transcript(&self, session_id: &str) -> Result<Option<Vec<Turn>>, ChatError> {
        Ok(self.store.get(session_id).await?.map(|s| s.transcript))
    }

    async fn append_or_recreate(&self, id: &str, turn: Turn) -> Result<SessionSnapshot, ChatError> {
        if let Some(snapshot) = self.store.append(id, turn.clone()).await? {
            return Ok(snapshot);
        }
        warn!(session_id = %id, "session vanished before append, re-creating");
        self.store.get_or_create(id, &self.system_prompt).await?;
        self.store
            .append(id, turn)
            .await?
            .ok_or_else(|| ChatError::Internal(format!("session '{id}' vanished during append")))
    }
}
