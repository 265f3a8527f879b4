//! Session lifecycle and conversation orchestration for Parley.
//!
//! This crate defines the "ports" (`SessionStore`, `LlmProvider`) that the
//! infrastructure layer implements or plugs into, the in-memory session
//! store, the transcript window policy, and the `/chat` exchange protocol.
//! It depends only on `parley-types` -- never on `parley-infra` or any
//! network crate.

pub mod chat;
pub mod llm;
pub mod session;
