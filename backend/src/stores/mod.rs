//! In-memory stores backing the session-authentication flow.
//!
//! These are the only pieces of shared mutable state in the application.
//! Each store serializes its own writes behind an async RwLock so request
//! handlers can run concurrently without breaking uniqueness or membership
//! invariants.

pub mod refresh_registry;
pub mod user_store;
