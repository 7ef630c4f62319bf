//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for the session flow
//! (registration, login, token refresh, logout), parse request data, and
//! interact with the `auth::service` for core business logic. The refresh
//! token travels only in an HTTP-only cookie, never in a response body.

use crate::api::common::auth_error_to_http;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::errors::AuthError;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;

/// Name of the cookie carrying the refresh token.
pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

/// Handle user registration request
#[axum::debug_handler]
pub async fn register(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<ResponseJson<MessageResponse>, (StatusCode, String)> {
    match auth_service.register(payload).await {
        Ok(()) => Ok(ResponseJson(MessageResponse {
            message: "User registered successfully".to_string(),
        })),
        Err(error) => Err(auth_error_to_http(error)),
    }
}

/// Handle user login request
///
/// On success the access token is returned in the body and the refresh token
/// is set as an HTTP-only, same-site cookie.
#[axum::debug_handler]
pub async fn login(
    Extension(auth_service): Extension<Arc<AuthService>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, ResponseJson<AccessTokenResponse>), (StatusCode, String)> {
    let tokens = match auth_service.login(payload).await {
        Ok(tokens) => tokens,
        Err(error) => return Err(auth_error_to_http(error)),
    };

    let jar = jar.add(refresh_cookie(tokens.refresh_token));

    Ok((
        jar,
        ResponseJson(AccessTokenResponse {
            access_token: tokens.access_token,
            expires_in: tokens.expires_in,
        }),
    ))
}

/// Handle access-token refresh request
///
/// Reads the refresh token from its cookie: absent means unauthenticated,
/// while a token that is present but revoked or invalid is forbidden.
#[axum::debug_handler]
pub async fn refresh(
    Extension(auth_service): Extension<Arc<AuthService>>,
    jar: CookieJar,
) -> Result<ResponseJson<AccessTokenResponse>, (StatusCode, String)> {
    let token = jar
        .get(REFRESH_COOKIE_NAME)
        .ok_or_else(|| auth_error_to_http(AuthError::Unauthenticated))?;

    match auth_service.refresh(token.value()).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(auth_error_to_http(error)),
    }
}

/// Handle logout request
///
/// Revokes the refresh token (a no-op if it was never live) and clears the
/// cookie. Always succeeds, even with no cookie present.
#[axum::debug_handler]
pub async fn logout(
    Extension(auth_service): Extension<Arc<AuthService>>,
    jar: CookieJar,
) -> (CookieJar, ResponseJson<MessageResponse>) {
    if let Some(token) = jar.get(REFRESH_COOKIE_NAME) {
        auth_service.logout(token.value()).await;
    }

    let jar = jar.remove(removal_cookie());

    (
        jar,
        ResponseJson(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// Build the refresh-token cookie.
fn refresh_cookie(refresh_token: String) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, refresh_token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .build()
}

/// Removal cookie matching the attributes of `refresh_cookie`.
fn removal_cookie() -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, "")).path("/").build()
}
