//! LlmProvider trait definition.
//!
//! This is the boundary to the remote completion endpoint. The orchestrator
//! treats it as an opaque, possibly slow, possibly failing dependency: one
//! attempt per user message, no retry.

use parley_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion backends (OpenAI-compatible HTTP APIs, test mocks).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in parley-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "kluster").
    fn name(&self) -> &str;

    /// Send a completion request and receive the first candidate.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
