//! In-memory session store backed by `DashMap`.
//!
//! Each session lives in one map entry, so every operation on an id is
//! serialized by that entry's shard lock while other ids proceed in
//! parallel. Guards never escape a method: callers get cloned snapshots and
//! nothing is held across `.await` points.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use tracing::{debug, info};

use parley_types::chat::{SessionSnapshot, Turn};
use parley_types::error::StoreError;

use super::store::SessionStore;
use super::window::TranscriptWindow;

#[derive(Debug)]
struct SessionEntry {
    transcript: Vec<Turn>,
    last_active: DateTime<Utc>,
}

impl SessionEntry {
    fn snapshot(&self, id: &str) -> SessionSnapshot {
        SessionSnapshot {
            id: id.to_string(),
            transcript: self.transcript.clone(),
            last_active: self.last_active,
        }
    }
}

/// Process-local session store.
///
/// Cloning produces a shared view of the same underlying map (backed by `Arc`).
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<DashMap<String, SessionEntry>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get_or_create(
        &self,
        id: &str,
        system_prompt: &str,
    ) -> Result<SessionSnapshot, StoreError> {
        let mut created = false;
        let entry = self.sessions.entry(id.to_string()).or_insert_with(|| {
            created = true;
            SessionEntry {
                transcript: vec![Turn::system(system_prompt)],
                last_active: Utc::now(),
            }
        });
        if created {
            info!(session_id = %id, "new session started");
        }
        Ok(entry.snapshot(id))
    }

    async fn get(&self, id: &str) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.sessions.get(id).map(|entry| entry.snapshot(id)))
    }

    async fn append(&self, id: &str, turn: Turn) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.sessions.get_mut(id).map(|mut entry| {
            entry.transcript.push(turn);
            entry.last_active = Utc::now();
            entry.snapshot(id)
        }))
    }

    async fn touch(&self, id: &str) -> Result<bool, StoreError> {
        Ok(match self.sessions.get_mut(id) {
            Some(mut entry) => {
                entry.last_active = Utc::now();
                true
            }
            None => false,
        })
    }

    async fn trim(&self, id: &str, window: &TranscriptWindow) -> Result<usize, StoreError> {
        let dropped = self
            .sessions
            .get_mut(id)
            .map(|mut entry| window.apply(&mut entry.transcript))
            .unwrap_or(0);
        if dropped > 0 {
            debug!(session_id = %id, dropped, "transcript trimmed");
        }
        Ok(dropped)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.sessions.remove(id).is_some())
    }

    async fn sweep(&self, timeout: Duration) -> Result<usize, StoreError> {
        let now = Utc::now();
        // A timeout too large to represent means nothing can be old enough.
        let Some(cutoff) = TimeDelta::from_std(timeout)
            .ok()
            .and_then(|delta| now.checked_sub_signed(delta))
        else {
            return Ok(0);
        };

        let expired = AtomicUsize::new(0);
        self.sessions.retain(|id, entry| {
            let keep = entry.last_active >= cutoff;
            if !keep {
                expired.fetch_add(1, Ordering::Relaxed);
                info!(session_id = %id, "expired session removed");
            }
            keep
        });
        Ok(expired.into_inner())
    }

    async fn size(&self) -> Result<usize, StoreError> {
        Ok(self.sessions.len())
    }
}
