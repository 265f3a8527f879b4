//! SessionStore trait definition.
//!
//! The store is the exclusive owner of session state. Every operation is
//! atomic with respect to a single session id; operations on different ids
//! must not contend on a store-wide lock.

use std::time::Duration;

use parley_types::chat::{SessionSnapshot, Turn};
use parley_types::error::StoreError;

use super::window::TranscriptWindow;

/// Keyed registry of conversation sessions.
///
/// Implementations return snapshots, never guards, so callers cannot hold a
/// session lock across an `.await` (in particular the completion call).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait SessionStore: Send + Sync {
    /// Return the session for `id`, creating it with a single system turn if
    /// absent. At most one session per id is ever observable.
    fn get_or_create(
        &self,
        id: &str,
        system_prompt: &str,
    ) -> impl std::future::Future<Output = Result<SessionSnapshot, StoreError>> + Send;

    /// Read a session without creating or touching it.
    fn get(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<SessionSnapshot>, StoreError>> + Send;

    /// Append a turn and refresh `last_active`.
    ///
    /// Returns the snapshot after the append, or `None` when the session no
    /// longer exists (e.g. it raced with expiry); the caller must re-create.
    fn append(
        &self,
        id: &str,
        turn: Turn,
    ) -> impl std::future::Future<Output = Result<Option<SessionSnapshot>, StoreError>> + Send;

    /// Set `last_active` to now. Returns whether the session exists.
    fn touch(&self, id: &str) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;

    /// Apply the transcript window. Returns the number of turns dropped.
    fn trim(
        &self,
        id: &str,
        window: &TranscriptWindow,
    ) -> impl std::future::Future<Output = Result<usize, StoreError>> + Send;

    /// Remove a session. Idempotent; returns whether it existed.
    fn delete(&self, id: &str) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;

    /// Remove every session idle for longer than `timeout`. Returns the count removed.
    fn sweep(
        &self,
        timeout: Duration,
    ) -> impl std::future::Future<Output = Result<usize, StoreError>> + Send;

    /// Current number of sessions.
    fn size(&self) -> impl std::future::Future<Output = Result<usize, StoreError>> + Send;
}
