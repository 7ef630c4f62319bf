//! Handler functions for the protected profile endpoint.
//!
//! These functions read the authenticated identity attached by the JWT
//! middleware and return user-specific information.

use crate::utils::jwt::AccessClaims;
use axum::{extract::Extension, response::Json};
use serde::{Deserialize, Serialize};

/// Profile response for the authenticated user
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
    pub message: String,
}

/// Returns the profile of the authenticated user.
#[axum::debug_handler]
pub async fn get_profile(Extension(claims): Extension<AccessClaims>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: format!("Welcome {}!", claims.sub),
        username: claims.sub,
    })
}
