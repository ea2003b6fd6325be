//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::load_config;
#[cfg(not(target_arch = "wasm32"))]
pub use config::config_from_file;

mod flash;
pub use flash::{expire_after, Flash};

mod route;
pub use route::Page;

mod session;
pub use session::{make_session_store, use_session, SessionContext, SessionProvider};

mod timer;
pub use timer::sleep;

pub mod views;

pub const PORTAL_CSS: Asset = asset!("/assets/portal.css");
