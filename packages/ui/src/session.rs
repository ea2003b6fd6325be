//! Session context for the UI.
//!
//! [`SessionProvider`] loads the persisted session once and provides a
//! [`SessionContext`] to every view below it. Views read the signed-in user from
//! the context and persist through [`SessionContext::store`]; nothing touches
//! storage directly.

use dioxus::prelude::*;
use store::{KeyValueStore, PortalConfig, SessionStore, UserRecord};

/// Create the platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Desktop** (native): `<data_dir>/jobportal/<key>.json`
/// - anything else: in-memory, lost on reload
pub fn make_session_store(config: &PortalConfig) -> SessionStore<impl KeyValueStore> {
    let key = &config.session.storage_key;
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::with_key(store::LocalStorageStore::new(), key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::with_key(store::MemoryStore::new(), key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("jobportal");
        SessionStore::with_key(store::FileStore::new(base), key)
    }
}

/// Signed-in user plus the configuration the views run with.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    user: Signal<Option<UserRecord>>,
    config: Signal<PortalConfig>,
}

impl SessionContext {
    pub fn user(&self) -> Option<UserRecord> {
        self.user.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn config(&self) -> PortalConfig {
        self.config.read().clone()
    }

    /// The persisted store backing this session.
    pub fn store(&self) -> SessionStore<impl KeyValueStore> {
        make_session_store(&self.config.read())
    }

    /// Record a user that has already been persisted by the auth flow.
    pub fn sign_in(&mut self, user: UserRecord) {
        self.user.set(Some(user));
    }

    /// Replace the in-memory record after a profile save.
    pub fn update(&mut self, user: UserRecord) {
        self.user.set(Some(user));
    }

    /// Clear the persisted session and the in-memory user.
    pub fn sign_out(&mut self) {
        if let Err(e) = api::logout(&self.store()) {
            tracing::error!("failed to clear stored session: {e}");
        }
        self.user.set(None);
    }
}

/// Get the session context provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Provider component that loads the persisted session.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: PortalConfig, children: Element) -> Element {
    let config = use_signal(move || config);
    let user = use_signal(|| make_session_store(&config.read()).load());

    use_context_provider(|| SessionContext { user, config });

    rsx! {
        {children}
    }
}
