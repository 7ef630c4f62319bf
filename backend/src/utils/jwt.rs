//! JWT token utilities for authentication.
//!
//! Provides token creation and validation for the two token kinds the
//! session flow uses: short-lived access tokens and long-lived refresh
//! tokens. The two kinds are signed with independent secrets, so a leaked
//! access token can never be used to forge a refresh token and vice versa.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AuthError, AuthResult};

/// Claims carried by an access token.
///
/// Validity is determined purely by signature and expiry; nothing is stored
/// server-side. Inserted into request extensions by the auth middleware as
/// the request-scoped authenticated identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// Username of the authenticated user.
    pub sub: String,
    /// Token issued-at timestamp.
    pub iat: usize,
    /// Token expiration timestamp.
    pub exp: usize,
}

/// Claims carried by a refresh token.
///
/// Refresh tokens embed no expiry; revocation is handled entirely by the
/// refresh registry's membership check.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefreshClaims {
    /// Username the token can mint access tokens for.
    pub sub: String,
    /// Token issued-at timestamp.
    pub iat: usize,
}

/// JWT utility for creating and validating both token kinds.
#[derive(Clone)]
pub struct JwtUtils {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    access_validation: Validation,
    refresh_validation: Validation,
    access_ttl: Duration,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from loaded configuration.
    pub fn new(config: &Config) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.access_token_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_token_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_token_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_token_secret.as_bytes());

        let mut access_validation = Validation::new(Algorithm::HS256);
        access_validation.validate_exp = true;
        // Expiry is exact; the default 60s leeway would blur the TTL.
        access_validation.leeway = 0;

        // Refresh tokens carry no exp claim at all.
        let mut refresh_validation = Validation::new(Algorithm::HS256);
        refresh_validation.validate_exp = false;
        refresh_validation.required_spec_claims.clear();

        JwtUtils {
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            access_validation,
            refresh_validation,
            access_ttl: Duration::seconds(config.access_token_ttl_seconds as i64),
        }
    }

    /// Lifetime of issued access tokens, in seconds.
    pub fn access_ttl_seconds(&self) -> u64 {
        self.access_ttl.num_seconds() as u64
    }

    /// Generate a new access token for `username` with the configured TTL.
    pub fn issue_access_token(&self, username: &str) -> AuthResult<String> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: username.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.access_ttl).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.access_encoding_key)
            .map_err(|e| AuthError::internal(format!("access token generation failed: {}", e)))
    }

    /// Generate a new refresh token for `username`.
    pub fn issue_refresh_token(&self, username: &str) -> AuthResult<String> {
        let claims = RefreshClaims {
            sub: username.to_string(),
            iat: Utc::now().timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.refresh_encoding_key)
            .map_err(|e| AuthError::internal(format!("refresh token generation failed: {}", e)))
    }

    /// Validate and decode an access token.
    pub fn verify_access_token(&self, token: &str) -> AuthResult<AccessClaims> {
        decode::<AccessClaims>(token, &self.access_decoding_key, &self.access_validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })
    }

    /// Validate and decode a refresh token.
    ///
    /// Checks cryptographic validity only; whether the token is still live is
    /// the refresh registry's concern.
    pub fn verify_refresh_token(&self, token: &str) -> AuthResult<RefreshClaims> {
        decode::<RefreshClaims>(token, &self.refresh_decoding_key, &self.refresh_validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| AuthError::TokenInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            access_token_secret: "access-secret".to_string(),
            refresh_token_secret: "refresh-secret".to_string(),
            access_token_ttl_seconds: 900,
            server_port: 3000,
        }
    }

    #[test]
    fn access_token_round_trips() {
        let jwt = JwtUtils::new(&test_config());
        let token = jwt.issue_access_token("alice").unwrap();

        let claims = jwt.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp, claims.iat + 900);
    }

    #[test]
    fn expired_access_token_is_rejected_as_expired() {
        let jwt = JwtUtils::new(&test_config());
        let now = Utc::now().timestamp() as usize;
        let claims = AccessClaims {
            sub: "alice".to_string(),
            iat: now - 1000,
            exp: now - 100,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"access-secret"),
        )
        .unwrap();

        let err = jwt.verify_access_token(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn tampered_access_token_is_invalid() {
        let jwt = JwtUtils::new(&test_config());
        let token = jwt.issue_access_token("alice").unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('x');
        assert!(matches!(
            jwt.verify_access_token(&tampered).unwrap_err(),
            AuthError::TokenInvalid
        ));

        assert!(matches!(
            jwt.verify_access_token("not-a-jwt").unwrap_err(),
            AuthError::TokenInvalid
        ));
    }

    #[test]
    fn secrets_are_independent() {
        let jwt = JwtUtils::new(&test_config());
        let access = jwt.issue_access_token("alice").unwrap();
        let refresh = jwt.issue_refresh_token("alice").unwrap();

        // A token signed with one secret never verifies under the other.
        assert!(jwt.verify_refresh_token(&access).is_err());
        assert!(jwt.verify_access_token(&refresh).is_err());
    }

    #[test]
    fn refresh_token_verifies_without_expiry() {
        let jwt = JwtUtils::new(&test_config());
        let token = jwt.issue_refresh_token("alice").unwrap();

        let claims = jwt.verify_refresh_token(&token).unwrap();
        assert_eq!(claims.sub, "alice");
    }
}
