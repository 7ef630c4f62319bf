//! Credential store holding registered users and their password hashes.
//!
//! Records are keyed by username, created on registration and never mutated
//! or deleted afterwards. Uniqueness is enforced under the write lock, so two
//! simultaneous registrations for the same username cannot both succeed.

use crate::errors::{AuthError, AuthResult};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A registered user. The raw password is never stored, only its bcrypt hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

/// Username-keyed credential store.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new user record.
    ///
    /// Uniqueness is checked again under the write lock; callers may have
    /// done a cheaper `contains` check before hashing, but that check is
    /// advisory only.
    pub async fn insert(&self, username: String, password_hash: String) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&username) {
            return Err(AuthError::DuplicateUser(username));
        }
        users.insert(
            username.clone(),
            UserRecord {
                username,
                password_hash,
            },
        );
        Ok(())
    }

    /// Returns whether a record exists for `username`.
    pub async fn contains(&self, username: &str) -> bool {
        self.users.read().await.contains_key(username)
    }

    /// Looks up a user record by username.
    pub async fn get(&self, username: &str) -> Option<UserRecord> {
        self.users.read().await.get(username).cloned()
    }
}
