//! Credential storage behind the API client.
//!
//! The two token strings (and the cached profile) are the only state that
//! outlives a single screen. They are injected into `ApiClient` as a
//! `SessionStore` rather than read as ambient globals, so host tests can run
//! against an in-memory store and the refresh path stays observable.

use std::sync::Mutex;

use crate::utils::storage as storage_utils;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const CURRENT_USER_KEY: &str = "current_user";

pub trait SessionStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Persist a freshly issued token pair (login / registration).
    fn store_tokens(&self, access: &str, refresh: &str);
    /// Overwrite only the access token (successful refresh).
    fn set_access_token(&self, access: &str);
    fn store_user(&self, user_json: &str);
    fn current_user(&self) -> Option<String>;
    /// Erase every credential (logout, irrecoverable refresh failure).
    fn clear(&self);
}

/// localStorage-backed store used by the running app. Holds no handle;
/// the storage object is looked up per call so the type stays `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn get(key: &str) -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(key: &str, value: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key} to localStorage");
            }
        }
    }

    fn remove(key: &str) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

impl SessionStore for BrowserSession {
    fn access_token(&self) -> Option<String> {
        Self::get(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        Self::get(REFRESH_TOKEN_KEY)
    }

    fn store_tokens(&self, access: &str, refresh: &str) {
        Self::set(ACCESS_TOKEN_KEY, access);
        Self::set(REFRESH_TOKEN_KEY, refresh);
    }

    fn set_access_token(&self, access: &str) {
        Self::set(ACCESS_TOKEN_KEY, access);
    }

    fn store_user(&self, user_json: &str) {
        Self::set(CURRENT_USER_KEY, user_json);
    }

    fn current_user(&self) -> Option<String> {
        Self::get(CURRENT_USER_KEY)
    }

    fn clear(&self) {
        Self::remove(ACCESS_TOKEN_KEY);
        Self::remove(REFRESH_TOKEN_KEY);
        Self::remove(CURRENT_USER_KEY);
    }
}

/// In-memory store for host-side tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemorySession {
    access: Mutex<Option<String>>,
    refresh: Mutex<Option<String>>,
    user: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        let session = Self::default();
        session.store_tokens(access, refresh);
        session
    }
}

impl SessionStore for MemorySession {
    fn access_token(&self) -> Option<String> {
        self.access.lock().expect("session lock").clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.lock().expect("session lock").clone()
    }

    fn store_tokens(&self, access: &str, refresh: &str) {
        *self.access.lock().expect("session lock") = Some(access.to_string());
        *self.refresh.lock().expect("session lock") = Some(refresh.to_string());
    }

    fn set_access_token(&self, access: &str) {
        *self.access.lock().expect("session lock") = Some(access.to_string());
    }

    fn store_user(&self, user_json: &str) {
        *self.user.lock().expect("session lock") = Some(user_json.to_string());
    }

    fn current_user(&self) -> Option<String> {
        self.user.lock().expect("session lock").clone()
    }

    fn clear(&self) {
        *self.access.lock().expect("session lock") = None;
        *self.refresh.lock().expect("session lock") = None;
        *self.user.lock().expect("session lock") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_session_round_trips_tokens() {
        let session = MemorySession::new();
        assert!(session.access_token().is_none());

        session.store_tokens("acc-1", "ref-1");
        assert_eq!(session.access_token().as_deref(), Some("acc-1"));
        assert_eq!(session.refresh_token().as_deref(), Some("ref-1"));

        session.set_access_token("acc-2");
        assert_eq!(session.access_token().as_deref(), Some("acc-2"));
        assert_eq!(session.refresh_token().as_deref(), Some("ref-1"));
    }

    #[test]
    fn clear_erases_everything() {
        let session = MemorySession::with_tokens("acc", "ref");
        session.store_user("{\"id\":1}");
        session.clear();
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert!(session.current_user().is_none());
    }
}
