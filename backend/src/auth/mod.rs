//! Authentication module for managing user accounts, sessions, and access control.
//!
//! This module provides the public interface for the session-authentication
//! flow: registration, login, access-token refresh, logout, and the
//! authorization middleware protecting other routes.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
