//! Error handling utilities for API responses.
//!
//! Provides structured error responses and conversion between the
//! authentication error taxonomy and HTTP responses.
//!
//! # Response Format
//! All errors return consistent JSON responses containing:
//! - `message`: Human-readable message
//! - `error.error_type`: Machine-readable error category
//!
//! # Error Handling Flow
//! 1. Service layer returns a domain-specific `AuthError`
//! 2. `auth_error_to_http` converts it to the appropriate HTTP response

use crate::errors::AuthError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Request timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error_type: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Converts AuthError to the appropriate HTTP response with standard format.
///
/// Statuses are stable: duplicate/unknown-user map to 400, a missing
/// credential to 401, a presented-but-rejected credential to 403. Internal
/// detail is logged and never echoed to the client.
pub fn auth_error_to_http(error: AuthError) -> (StatusCode, String) {
    let (status, error_type, message) = match error {
        AuthError::DuplicateUser(username) => (
            StatusCode::BAD_REQUEST,
            "duplicate_user",
            format!("User '{}' already exists", username),
        ),
        AuthError::UserNotFound(username) => (
            StatusCode::BAD_REQUEST,
            "user_not_found",
            format!("User '{}' not found", username),
        ),
        AuthError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "Invalid credentials".to_string(),
        ),
        AuthError::Unauthenticated => (
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "Authentication required".to_string(),
        ),
        AuthError::TokenExpired => (
            StatusCode::FORBIDDEN,
            "token_expired",
            "Token has expired".to_string(),
        ),
        AuthError::TokenInvalid => (
            StatusCode::FORBIDDEN,
            "token_invalid",
            "Token is invalid".to_string(),
        ),
        AuthError::Forbidden => (
            StatusCode::FORBIDDEN,
            "forbidden",
            "Refresh token rejected".to_string(),
        ),
        AuthError::Validation(message) => (StatusCode::BAD_REQUEST, "validation_error", message),
        AuthError::Internal(message) => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            )
        }
    };

    let error_response = ApiResponse::<()>::error(message, error_type);
    (status, serde_json::to_string(&error_response).unwrap())
}
