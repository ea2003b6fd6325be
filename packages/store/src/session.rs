//! # Session store
//!
//! [`SessionStore`] holds at most one serialized [`UserRecord`] under a single key
//! of a [`KeyValueStore`]. It is read at startup, overwritten on login, signup and
//! profile save, and cleared on logout. There is no merging at this layer; callers
//! merge before calling [`save`](SessionStore::save).
//!
//! A persisted value that does not parse, or parses without a name or email, is
//! treated as absent by [`load`](SessionStore::load): the value is removed and the
//! caller sees no session. [`try_load`](SessionStore::try_load) reports the same
//! condition as an error instead.

use tracing::warn;

use crate::backend::KeyValueStore;
use crate::error::StoreError;
use crate::models::UserRecord;

/// Default key the session record is stored under.
pub const SESSION_KEY: &str = "user";

/// Persisted single-user session.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, SESSION_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Read the session, distinguishing absent, corrupt and unreadable storage.
    pub fn try_load(&self) -> Result<Option<UserRecord>, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        let record: UserRecord = serde_json::from_str(&raw).map_err(StoreError::Corrupt)?;
        if !record.is_complete() {
            return Err(StoreError::Incomplete);
        }
        Ok(Some(record))
    }

    /// Read the session. Anything other than a well-formed record is treated as absent.
    pub fn load(&self) -> Option<UserRecord> {
        match self.try_load() {
            Ok(record) => record,
            Err(e @ (StoreError::Corrupt(_) | StoreError::Incomplete)) => {
                warn!(key = %self.key, "discarding stored session: {e}");
                if let Err(e) = self.backend.remove(&self.key) {
                    warn!(key = %self.key, "failed to remove stored session: {e}");
                }
                None
            }
            Err(e) => {
                warn!(key = %self.key, "failed to read stored session: {e}");
                None
            }
        }
    }

    /// Overwrite the session with `record`.
    pub fn save(&self, record: &UserRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record).map_err(StoreError::Encode)?;
        self.backend.set(&self.key, &raw)
    }

    /// Remove the session.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Role;

    fn ada() -> UserRecord {
        UserRecord {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "p".to_string(),
            role: Role::Employer,
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_at_cold_start() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(session.load().is_none());
        assert!(session.try_load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let backend = MemoryStore::new();
        let session = SessionStore::new(backend.clone());

        session.save(&ada()).unwrap();
        assert_eq!(session.load(), Some(ada()));
        assert!(backend.get(SESSION_KEY).unwrap().is_some());

        session.clear().unwrap();
        assert!(session.load().is_none());
        assert!(backend.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites() {
        let session = SessionStore::new(MemoryStore::new());
        session.save(&ada()).unwrap();

        let mut other = ada();
        other.name = "Grace".to_string();
        session.save(&other).unwrap();

        assert_eq!(session.load().unwrap().name, "Grace");
    }

    #[test]
    fn test_custom_key() {
        let backend = MemoryStore::new();
        let session = SessionStore::with_key(backend.clone(), "portal-user");
        session.save(&ada()).unwrap();

        assert!(backend.get("portal-user").unwrap().is_some());
        assert!(backend.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_session_is_treated_as_absent() {
        let backend = MemoryStore::new();
        backend.set(SESSION_KEY, "{not json").unwrap();
        let session = SessionStore::new(backend.clone());

        assert!(matches!(session.try_load(), Err(StoreError::Corrupt(_))));
        assert!(session.load().is_none());

        // The bad value is gone afterwards
        assert!(backend.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_partially_shaped_session_is_treated_as_absent() {
        let backend = MemoryStore::new();
        let session = SessionStore::new(backend.clone());

        // Missing name entirely
        backend.set(SESSION_KEY, r#"{"email":"a@x.com"}"#).unwrap();
        assert!(session.load().is_none());

        // Present but blank
        backend
            .set(SESSION_KEY, r#"{"name":"  ","email":"a@x.com"}"#)
            .unwrap();
        assert!(matches!(session.try_load(), Err(StoreError::Incomplete)));
        assert!(session.load().is_none());
        assert!(backend.get(SESSION_KEY).unwrap().is_none());
    }
}
