//! The `/chat` exchange protocol: input sanitization, session id
//! resolution, system prompt rendering, and the orchestrator itself.

pub mod input;
pub mod prompt;
pub mod service;
