//! Local data for the job portal: the user model, the persisted session and the
//! configuration file.

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use backend::KeyValueStore;
pub use config::PortalConfig;
pub use error::StoreError;
pub use models::{Credentials, NewUser, ProfileEdit, Role, UserRecord};
pub use session::{SessionStore, SESSION_KEY};
