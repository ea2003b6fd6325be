//! # Portal configuration — `jobportal.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"   # users collaborator
//!
//! [session]
//! storage_key = "user"                 # key the session record lives under
//!
//! [profile]
//! save_delay_ms = 1000                 # artificial delay before a profile save
//! success_message_secs = 3             # how long the success message stays up
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration. [`PortalConfig::with_env_overrides`]
//! applies `JOBPORTAL_API_URL` on top.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::SESSION_KEY;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "JOBPORTAL_API_URL";

/// Top-level configuration stored in `jobportal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Users collaborator settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    SESSION_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

/// Profile form timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_save_delay_ms")]
    pub save_delay_ms: u64,
    #[serde(default = "default_success_message_secs")]
    pub success_message_secs: u64,
}

fn default_save_delay_ms() -> u64 {
    1000
}

fn default_success_message_secs() -> u64 {
    3
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: default_save_delay_ms(),
            success_message_secs: default_success_message_secs(),
        }
    }
}

impl ProfileConfig {
    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }

    pub fn success_message_duration(&self) -> Duration {
        Duration::from_secs(self.success_message_secs)
    }
}

impl PortalConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "jobportal.toml"
    }

    /// Builder method to point at a different collaborator.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Apply an API URL override, ignoring blank values.
    pub fn with_api_url_override(self, url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// Apply `JOBPORTAL_API_URL` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
