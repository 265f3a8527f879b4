//! Shared domain types for Parley.
//!
//! This crate contains the core domain types used across the Parley chat
//! proxy: conversation turns and session snapshots, completion request and
//! response shapes, catalog content, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
