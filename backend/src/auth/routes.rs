//! Defines the HTTP routes for the session-authentication flow.
//!
//! These routes handle user registration, login, access-token refresh, and
//! logout. They are designed to be merged into the main Axum router.

use crate::auth::handlers::*;
use axum::{Router, routing::post};

/// Creates the session router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
}
