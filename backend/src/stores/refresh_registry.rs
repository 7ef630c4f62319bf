//! Registry of refresh tokens that are currently live.
//!
//! Membership here is the sole source of truth for refresh-token liveness: a
//! cryptographically valid token that was never registered, or was revoked at
//! logout, must be rejected by the refresh flow.

use std::collections::HashSet;
use tokio::sync::RwLock;

/// Set of refresh tokens accepted by `/refresh`.
#[derive(Debug, Default)]
pub struct RefreshRegistry {
    live: RwLock<HashSet<String>>,
}

impl RefreshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a freshly issued refresh token as live.
    pub async fn register(&self, token: &str) {
        self.live.write().await.insert(token.to_string());
    }

    /// Returns whether `token` is currently live.
    pub async fn is_live(&self, token: &str) -> bool {
        self.live.read().await.contains(token)
    }

    /// Removes a token from the live set.
    ///
    /// Idempotent: revoking a token that was never registered, or was
    /// already revoked, is a no-op.
    pub async fn revoke(&self, token: &str) {
        self.live.write().await.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_then_revoke() {
        let registry = RefreshRegistry::new();
        assert!(!registry.is_live("tok").await);

        registry.register("tok").await;
        assert!(registry.is_live("tok").await);

        registry.revoke("tok").await;
        assert!(!registry.is_live("tok").await);
    }

    #[tokio::test]
    async fn revoke_is_idempotent() {
        let registry = RefreshRegistry::new();
        registry.revoke("never-registered").await;

        registry.register("tok").await;
        registry.revoke("tok").await;
        registry.revoke("tok").await;
        assert!(!registry.is_live("tok").await);
    }

    #[tokio::test]
    async fn tokens_are_tracked_independently() {
        let registry = RefreshRegistry::new();
        registry.register("alice-tok").await;
        registry.register("bob-tok").await;

        registry.revoke("alice-tok").await;
        assert!(!registry.is_live("alice-tok").await);
        assert!(registry.is_live("bob-tok").await);
    }
}
