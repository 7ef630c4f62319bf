//! Core business logic for the authentication system.
//!
//! This service orchestrates the credential store, the refresh registry, and
//! the token issuer for registration, login, token refresh, and logout.

use crate::auth::models::*;
use crate::errors::{AuthError, AuthResult};
use crate::stores::refresh_registry::RefreshRegistry;
use crate::stores::user_store::UserStore;
use crate::utils::jwt::JwtUtils;
use bcrypt::{DEFAULT_COST, hash, verify};
use validator::Validate;

/// Authentication service for handling registration, login, token refresh,
/// and logout.
pub struct AuthService {
    users: UserStore,
    refresh_registry: RefreshRegistry,
    jwt_utils: JwtUtils,
}

impl AuthService {
    /// Create a new AuthService instance over empty stores.
    pub fn new(jwt_utils: JwtUtils) -> Self {
        AuthService {
            users: UserStore::new(),
            refresh_registry: RefreshRegistry::new(),
            jwt_utils,
        }
    }

    /// Register a new user with a bcrypt-hashed password.
    ///
    /// Hashing is CPU-bound and runs on the blocking pool; no store lock is
    /// held during it. The store re-checks uniqueness at insert time, so the
    /// early duplicate check is only a way to skip the hashing cost.
    pub async fn register(&self, request: RegisterRequest) -> AuthResult<()> {
        validate_request(&request)?;

        if self.users.contains(&request.username).await {
            return Err(AuthError::DuplicateUser(request.username));
        }

        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
            .await
            .map_err(|e| AuthError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| AuthError::internal(format!("password hashing failed: {}", e)))?;

        self.users.insert(request.username, password_hash).await
    }

    /// Authenticate a user and issue the session token pair.
    ///
    /// The refresh token is registered as live before being handed out.
    pub async fn login(&self, request: LoginRequest) -> AuthResult<SessionTokens> {
        validate_request(&request)?;

        let user = self
            .users
            .get(&request.username)
            .await
            .ok_or_else(|| AuthError::UserNotFound(request.username.clone()))?;

        let password = request.password;
        let stored_hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify(password, &stored_hash))
            .await
            .map_err(|e| AuthError::internal(format!("verification task failed: {}", e)))?
            .map_err(|e| AuthError::internal(format!("password verification failed: {}", e)))?;

        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.jwt_utils.issue_access_token(&user.username)?;
        let refresh_token = self.jwt_utils.issue_refresh_token(&user.username)?;
        self.refresh_registry.register(&refresh_token).await;

        tracing::info!("User '{}' logged in", user.username);

        Ok(SessionTokens {
            access_token,
            refresh_token,
            expires_in: self.jwt_utils.access_ttl_seconds(),
        })
    }

    /// Exchange a live refresh token for a new access token.
    ///
    /// Registry membership is checked first: a token revoked at logout is
    /// rejected no matter how valid its signature is. The refresh token is
    /// not rotated; it stays live until logout.
    pub async fn refresh(&self, refresh_token: &str) -> AuthResult<AccessTokenResponse> {
        if !self.refresh_registry.is_live(refresh_token).await {
            return Err(AuthError::Forbidden);
        }

        let claims = self
            .jwt_utils
            .verify_refresh_token(refresh_token)
            .map_err(|_| AuthError::Forbidden)?;

        let access_token = self.jwt_utils.issue_access_token(&claims.sub)?;

        Ok(AccessTokenResponse {
            access_token,
            expires_in: self.jwt_utils.access_ttl_seconds(),
        })
    }

    /// Revoke a refresh token.
    ///
    /// Idempotent: logging out with an already-revoked or never-issued token
    /// succeeds all the same.
    pub async fn logout(&self, refresh_token: &str) {
        self.refresh_registry.revoke(refresh_token).await;
    }
}

/// Runs `validator` rules and folds field errors into a single message.
fn validate_request<T: Validate>(request: &T) -> AuthResult<()> {
    if let Err(validation_errors) = request.validate() {
        let error_messages: Vec<String> = validation_errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();
        return Err(AuthError::validation(error_messages.join(", ")));
    }
    Ok(())
}
