//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used by the desktop launcher so the
//! session survives restarts. Each key is one file holding the raw value.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/jobportal/` |
//! | Linux | `~/.local/share/jobportal/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\jobportal\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::backend::KeyValueStore;
use crate::error::StoreError;

/// Filesystem-backed store, one file per key.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(format!("{file}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jobportal_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_base("roundtrip");

        let store = FileStore::new(dir.clone());
        assert_eq!(store.get("user").unwrap(), None);
        store.set("user", r#"{"name":"A"}"#).unwrap();

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("user").unwrap().as_deref(), Some(r#"{"name":"A"}"#));

        reopened.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);

        // Removing twice is fine
        assert!(store.remove("user").is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keys_cannot_escape_base() {
        let dir = temp_base("escape");
        let store = FileStore::new(dir.clone());

        store.set("../outside", "x").unwrap();
        assert!(dir.join("___outside.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
