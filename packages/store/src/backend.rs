//! # Key-value persistence backends
//!
//! [`KeyValueStore`] is the narrow interface the session layer persists through:
//! string keys to string values, with `get`/`set`/`remove`. Implementations live in
//! sibling modules:
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`MemoryStore`](crate::MemoryStore) | any (tests, fallback) | `memory` |
//! | [`FileStore`](crate::FileStore) | desktop | `file_store` |
//! | `LocalStorageStore` | web (`wasm32` + `web` feature) | `local_storage` |
//!
//! The interface is synchronous because `window.localStorage` is.

use crate::error::StoreError;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
