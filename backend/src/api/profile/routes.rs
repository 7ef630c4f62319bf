//! Defines the HTTP routes for the protected profile endpoint.

use super::handlers::get_profile;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn profile_router() -> Router {
    Router::new().route(
        "/profile",
        get(get_profile).layer(middleware::from_fn(jwt_auth)),
    )
}
