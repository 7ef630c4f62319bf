//! Token-based session authentication backend.
//!
//! Exposes the module tree and the application router constructor so both
//! the binary entrypoint and the integration tests can build the same app.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod stores;
pub mod utils;

use crate::api::common::ApiResponse;
use crate::auth::service::AuthService;
use crate::config::Config;
use crate::utils::jwt::JwtUtils;
use axum::{Extension, Router, response::Json, routing::get};
use std::sync::Arc;

/// Builds the application router over fresh in-memory stores.
///
/// The JWT utilities and the auth service are constructed once here and
/// shared with every request through extensions; secrets are never re-read
/// from the environment per request.
pub fn build_app(config: &Config) -> Router {
    let jwt_utils = JwtUtils::new(config);
    let auth_service = Arc::new(AuthService::new(jwt_utils.clone()));

    Router::new()
        .route("/", get(root_handler))
        .merge(auth::routes::auth_router())
        .merge(api::profile::routes::profile_router())
        .layer(Extension(auth_service))
        .layer(Extension(jwt_utils))
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Session Auth Backend",
            "version": "0.1.0"
        }),
        "Welcome to the Session Auth API",
    ))
}
