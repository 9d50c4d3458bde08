//! Session Service
//!
//! Explicit get/set/clear access to the persisted signed-in user.
//! A session is created on login and destroyed on logout; pages receive the
//! service through context instead of touching browser storage directly.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::context::Page;
use crate::models::Session;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key/value storage holding the raw session record
pub trait SessionBackend: Send + Sync {
    fn get_raw(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or(SessionError::Unavailable)?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?
            .ok_or(SessionError::Unavailable)
    }

    /// Whether the browser exposes local storage at all
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl SessionBackend for LocalStorageBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, SessionError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

/// In-process storage. Used when local storage is blocked, and in tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SessionError> {
        self.entries
            .lock()
            .map_err(|_| SessionError::Storage("memory storage poisoned".to_string()))
    }
}

impl SessionBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Session lifecycle over a storage backend
#[derive(Clone)]
pub struct SessionService {
    backend: Arc<dyn SessionBackend>,
    key: String,
}

impl SessionService {
    pub fn new(backend: Arc<dyn SessionBackend>, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// Local storage when the browser allows it, memory otherwise
    pub fn browser(key: impl Into<String>) -> Self {
        if LocalStorageBackend::is_available() {
            Self::new(Arc::new(LocalStorageBackend), key)
        } else {
            log::warn!("localStorage unavailable, session will not survive reload");
            Self::new(Arc::new(MemoryBackend::default()), key)
        }
    }

    /// Current session, if a valid one is stored.
    ///
    /// Records that fail to parse (including unknown roles) count as signed
    /// out and are removed.
    pub fn get(&self) -> Option<Session> {
        let raw = match self.backend.get_raw(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("failed to read session: {}", e);
                return None;
            }
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding invalid session record: {}", e);
                self.clear();
                None
            }
        }
    }

    pub fn set(&self, session: &Session) -> Result<(), SessionError> {
        let raw = serde_json::to_string(session)?;
        self.backend.set_raw(&self.key, &raw)?;
        log::info!("session started for {} ({})", session.email, session.role.as_str());
        Ok(())
    }

    pub fn clear(&self) {
        match self.backend.remove(&self.key) {
            Ok(()) => log::info!("session cleared"),
            Err(e) => log::warn!("failed to clear session: {}", e),
        }
    }
}

/// Outcome of checking access to a protected page
#[derive(Debug, Clone, PartialEq)]
pub enum Guard {
    Allow(Session),
    Redirect(Page),
}

/// Gate for the inventory page: signed-out visitors go to login.
pub fn guard(service: &SessionService) -> Guard {
    match service.get() {
        Some(session) => Guard::Allow(session),
        None => Guard::Redirect(Page::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn memory_service() -> (Arc<MemoryBackend>, SessionService) {
        let backend = Arc::new(MemoryBackend::default());
        let service = SessionService::new(backend.clone(), "currentUser");
        (backend, service)
    }

    fn editor() -> Session {
        Session {
            id: 1,
            email: "admin@example.com".to_string(),
            name: "Admin User".to_string(),
            role: Role::Editor,
        }
    }

    #[test]
    fn test_no_session_redirects_to_login() {
        let (_, service) = memory_service();
        assert_eq!(guard(&service), Guard::Redirect(Page::Login));
    }

    #[test]
    fn test_set_get_clear_lifecycle() {
        let (_, service) = memory_service();
        service.set(&editor()).unwrap();
        assert_eq!(service.get(), Some(editor()));
        assert_eq!(guard(&service), Guard::Allow(editor()));

        service.clear();
        assert_eq!(service.get(), None);
        assert_eq!(guard(&service), Guard::Redirect(Page::Login));
    }

    #[test]
    fn test_stored_record_is_plain_json() {
        let (backend, service) = memory_service();
        service.set(&editor()).unwrap();
        let raw = backend.get_raw("currentUser").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["email"], "admin@example.com");
        assert_eq!(value["role"], "editor");
    }

    #[test]
    fn test_unknown_role_counts_as_signed_out() {
        let (backend, service) = memory_service();
        backend
            .set_raw("currentUser", r#"{"id":1,"email":"x@y.z","name":"X","role":"superuser"}"#)
            .unwrap();
        assert_eq!(guard(&service), Guard::Redirect(Page::Login));
        assert_eq!(backend.get_raw("currentUser").unwrap(), None);
    }

    #[test]
    fn test_malformed_record_is_removed() {
        let (backend, service) = memory_service();
        backend.set_raw("currentUser", "not json").unwrap();
        assert_eq!(service.get(), None);
        assert_eq!(backend.get_raw("currentUser").unwrap(), None);
    }

    #[test]
    fn test_key_is_respected() {
        let backend = Arc::new(MemoryBackend::default());
        let a = SessionService::new(backend.clone(), "a");
        let b = SessionService::new(backend, "b");
        a.set(&editor()).unwrap();
        assert!(a.get().is_some());
        assert!(b.get().is_none());
    }
}
