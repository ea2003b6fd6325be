//! Platform-specific configuration loading.
//!
//! - **Native**: `<config_dir>/jobportal/jobportal.toml` if present, then
//!   `JOBPORTAL_API_URL` from the environment.
//! - **Web**: defaults, with `JOBPORTAL_API_URL` taken from the build environment.

use store::PortalConfig;

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// Load the configuration for the current platform.
pub fn load_config() -> PortalConfig {
    #[cfg(target_arch = "wasm32")]
    {
        PortalConfig::default()
            .with_api_url_override(option_env!("JOBPORTAL_API_URL").map(str::to_string))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let config = match dirs::config_dir() {
            Some(dir) => config_from_file(&dir.join("jobportal").join(PortalConfig::filename())),
            None => PortalConfig::default(),
        };
        config.with_env_overrides()
    }
}

/// Read a config file, falling back to defaults when it is missing or invalid.
#[cfg(not(target_arch = "wasm32"))]
pub fn config_from_file(path: &Path) -> PortalConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return PortalConfig::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read config: {e}");
            return PortalConfig::default();
        }
    };
    match PortalConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "invalid config, using defaults: {e}");
            PortalConfig::default()
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("jobportal_missing_config.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(config_from_file(&path), PortalConfig::default());
    }

    #[test]
    fn test_reads_file() {
        let path = std::env::temp_dir().join(format!("jobportal_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[api]\nbase_url = \"http://127.0.0.1:3999\"\n").unwrap();

        let config = config_from_file(&path);
        assert_eq!(config.api.base_url, "http://127.0.0.1:3999");
        assert_eq!(config.session.storage_key, "user");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_is_default() {
        let path = std::env::temp_dir().join(format!("jobportal_bad_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[api\n").unwrap();

        assert_eq!(config_from_file(&path), PortalConfig::default());

        let _ = std::fs::remove_file(&path);
    }
}
