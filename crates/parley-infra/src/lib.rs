//! Infrastructure layer for Parley.
//!
//! Concrete implementations behind the ports defined in `parley-core`:
//! the OpenAI-compatible completion client, TOML config loading, the
//! built-in catalog, and credential resolution.

pub mod catalog;
pub mod config;
pub mod llm;
pub mod secret;
