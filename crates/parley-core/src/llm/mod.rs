//! LLM provider abstractions for Parley.
//!
//! - `LlmProvider`: RPITIT trait for concrete completion clients
//! - `BoxLlmProvider`: Object-safe wrapper for dynamic dispatch

pub mod box_provider;
pub mod provider;
