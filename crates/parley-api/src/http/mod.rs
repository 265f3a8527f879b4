//! HTTP layer for Parley.
//!
//! Axum router serving the chat, reset, and health endpoints with an
//! origin-restricted CORS policy.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
