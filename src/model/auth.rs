//! Session store
//!
//! A deliberately toy authentication layer, matching the system it models:
//! one hardcoded credential pair, the signed-in identity persisted under a
//! single storage key, nothing else. Persistence goes through the injected
//! `Storage` so the store can run against memory in tests.

use crate::storage::Storage;
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const AUTH_STORAGE_KEY: &str = "auth_user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

pub struct AuthStore {
    storage: Box<dyn Storage>,
}

impl AuthStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// The persisted session, if any. Unreadable state counts as signed out.
    pub fn current(&self) -> Option<AuthUser> {
        self.storage
            .get(AUTH_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// `None` means the credentials were rejected.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Option<AuthUser>> {
        if username != "admin" || password != "123456" {
            return Ok(None);
        }

        let user = AuthUser {
            id: "1".to_string(),
            email: "admin@system.com".to_string(),
            role: "admin".to_string(),
        };
        let raw = serde_json::to_string(&user)?;
        self.storage.set(AUTH_STORAGE_KEY, &raw)?;
        Ok(Some(user))
    }

    pub fn logout(&mut self) {
        self.storage.clear(AUTH_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_login_accepts_only_the_known_credentials() {
        let mut store = AuthStore::new(Box::new(MemoryStorage::new()));
        assert!(store.login("admin", "wrong").unwrap().is_none());
        assert!(store.login("root", "123456").unwrap().is_none());

        let user = store.login("admin", "123456").unwrap().unwrap();
        assert_eq!(user.role, "admin");
        assert_eq!(user.email, "admin@system.com");
    }

    #[test]
    fn test_session_persists_and_clears() {
        let mut store = AuthStore::new(Box::new(MemoryStorage::new()));
        assert!(store.current().is_none());

        store.login("admin", "123456").unwrap();
        assert!(store.current().is_some());

        store.logout();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_corrupt_session_counts_as_signed_out() {
        let mut storage = MemoryStorage::new();
        storage.set(AUTH_STORAGE_KEY, "not json").unwrap();
        let store = AuthStore::new(Box::new(storage));
        assert!(store.current().is_none());
    }
}
