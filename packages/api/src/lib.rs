//! # API crate — users collaborator client and account flows
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`directory`] | [`UserDirectory`] trait over the mock REST `/users` endpoint; [`HttpDirectory`] (reqwest) and [`MemoryDirectory`] implementations |
//! | [`auth`] | Login/signup state machine ([`AuthPhase`]) and the [`login`], [`signup`] and [`logout`] operations |
//! | [`profile`] | [`save_profile`], merging profile edits into the persisted session |
//! | [`error`] | [`DirectoryError`], [`AuthError`], [`ProfileError`] |
//!
//! Everything here runs on the single UI task; the async functions have no `Send`
//! bounds so they work unchanged on `wasm32`.

pub mod auth;
pub mod directory;
pub mod error;
pub mod profile;

pub use auth::{login, logout, signup, AuthPhase};
pub use directory::{HttpDirectory, MemoryDirectory, UserDirectory};
pub use error::{AuthError, DirectoryError, ProfileError};
pub use profile::save_profile;

pub use store::{Credentials, NewUser, ProfileEdit, Role, UserRecord};
