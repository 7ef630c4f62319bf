//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for API domains beyond the core
//! session-authentication routes, which are handled separately in `auth`.

pub mod common;
pub mod profile;
