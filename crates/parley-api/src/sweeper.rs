//! Background expiry of idle sessions.
//!
//! Complements the sweep every `/chat` request performs, so idle sessions are
//! reclaimed even when no traffic arrives.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use parley_core::chat::service::ChatOrchestrator;
use parley_core::llm::provider::LlmProvider;
use parley_core::session::store::SessionStore;

/// Spawn the sweeper. Returns `None` when `every` is zero (disabled).
///
/// The task exits once `cancel` fires.
pub fn spawn_session_sweeper<S, P>(
    chat: Arc<ChatOrchestrator<S, P>>,
    every: Duration,
    cancel: CancellationToken,
) -> Option<JoinHandle<()>>
where
    S: SessionStore + 'static,
    P: LlmProvider + 'static,
{
    if every.is_zero() {
        tracing::info!("background session sweeper disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("background session sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = chat.sweep_expired().await {
                        tracing::warn!(error = %e, "background sweep failed");
                    }
                }
            }
        }
    }))
}

/// Wait for a cancelled sweeper to finish. A panicked or aborted task is
/// logged and reported as `false`.
pub async fn join_sweeper(handle: JoinHandle<()>) -> bool {
    match handle.await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "session sweeper task failed");
            false
        }
    }
}
