//! Middleware for protecting authenticated routes.
//!
//! This module contains logic for validating access tokens and attaching the
//! authenticated identity to requests before they reach protected handlers.

use crate::utils::jwt::JwtUtils;
use axum::{
    Extension,
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// JWT authentication middleware for protected routes.
///
/// A request with no bearer token is rejected 401; a request whose token
/// fails verification (bad signature, malformed, or expired) is rejected
/// 403. On success the decoded claims are inserted into request extensions
/// and the pipeline continues; there is no other side effect.
pub async fn jwt_auth(
    Extension(jwt_utils): Extension<JwtUtils>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // Check if it's a Bearer token
    if !auth_header.starts_with("Bearer ") {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = &auth_header[7..]; // Remove "Bearer " prefix

    match jwt_utils.verify_access_token(token) {
        Ok(claims) => {
            // Add claims to request extensions for use in handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err(StatusCode::FORBIDDEN),
    }
}
