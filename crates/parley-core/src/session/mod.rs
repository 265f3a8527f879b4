//! Session storage abstractions for Parley.
//!
//! `SessionStore` is the seam at which an external shared store could be
//! substituted; `InMemorySessionStore` is the process-local implementation.

pub mod memory;
pub mod store;
pub mod window;
