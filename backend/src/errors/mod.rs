//! Global application error types and handlers.
//!
//! This module defines the authentication error taxonomy used across the
//! backend and provides mechanisms for consistent error handling and
//! response formatting.

use thiserror::Error;

/// Represents the failures the session-authentication flow can produce.
///
/// Every variant is client-facing and non-fatal; each maps to a stable HTTP
/// status in `api::common::auth_error_to_http`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A registration attempted to reuse an existing username.
    #[error("user already exists: {0}")]
    DuplicateUser(String),
    /// A login referenced a username with no stored record.
    #[error("user not found: {0}")]
    UserNotFound(String),
    /// The password did not match the stored hash.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// A token failed signature or structural verification.
    #[error("token invalid")]
    TokenInvalid,
    /// An access token was presented past its expiry.
    #[error("token expired")]
    TokenExpired,
    /// No credential was presented where one is required.
    #[error("authentication required")]
    Unauthenticated,
    /// A credential was presented but rejected.
    #[error("forbidden")]
    Forbidden,
    /// Input failed request-level validation.
    #[error("validation error: {0}")]
    Validation(String),
    /// Unexpected internal failure; details are logged, never echoed.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
