//! Player configuration

use std::env;
use std::path::PathBuf;

use lineup_domain::DEFAULT_MOBILE_BREAKPOINT;

use crate::application::services::{SessionSettings, DEFAULT_RESIZE_DEBOUNCE_MS};
use crate::infrastructure::http_client::DEFAULT_TIMEOUT_SECS;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Runner configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Base URL that relative save URLs resolve against
    pub api_base_url: String,
    /// CSRF token sent with saves
    pub csrf_token: Option<String>,
    /// Widths below this use tap mode
    pub mobile_breakpoint: u32,
    /// Quiet period before a resize re-evaluates the mode
    pub resize_debounce_ms: u64,
    pub http_timeout_secs: u64,
    /// Initial lineup data JSON
    pub data_path: Option<PathBuf>,
    /// Gesture script JSON
    pub script_path: Option<PathBuf>,
    /// Key/value storage file; the platform config dir when unset
    pub storage_path: Option<PathBuf>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            csrf_token: None,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_path: None,
            script_path: None,
            storage_path: None,
        }
    }
}

impl PlayerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup. Invalid numbers fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let number = |key: &str, default: u64| -> u64 {
            non_empty(key)
                .and_then(|v| match v.parse() {
                    Ok(n) => Some(n),
                    Err(_) => {
                        tracing::warn!(key, value = %v, "Invalid number, using default");
                        None
                    }
                })
                .unwrap_or(default)
        };

        Self {
            api_base_url: non_empty("LINEUP_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            csrf_token: non_empty("LINEUP_CSRF_TOKEN"),
            mobile_breakpoint: number("LINEUP_MOBILE_BREAKPOINT", u64::from(DEFAULT_MOBILE_BREAKPOINT))
                .try_into()
                .unwrap_or(DEFAULT_MOBILE_BREAKPOINT),
            resize_debounce_ms: number("LINEUP_RESIZE_DEBOUNCE_MS", DEFAULT_RESIZE_DEBOUNCE_MS),
            http_timeout_secs: number("LINEUP_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            data_path: non_empty("LINEUP_DATA_PATH").map(PathBuf::from),
            script_path: non_empty("LINEUP_SCRIPT_PATH").map(PathBuf::from),
            storage_path: non_empty("LINEUP_STORAGE_PATH").map(PathBuf::from),
        }
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            mobile_breakpoint: self.mobile_breakpoint,
            resize_debounce_ms: self.resize_debounce_ms,
            csrf_token: self.csrf_token.clone(),
        }
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> PlayerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlayerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), PlayerConfig::default());
    }

    #[test]
    fn reads_values() {
        let config = config_from(&[
            ("LINEUP_API_BASE_URL", "https://league.test"),
            ("LINEUP_CSRF_TOKEN", "abc"),
            ("LINEUP_MOBILE_BREAKPOINT", "1024"),
            ("LINEUP_RESIZE_DEBOUNCE_MS", "50"),
            ("LINEUP_DATA_PATH", "data/home.json"),
            ("LINEUP_STORAGE_PATH", "/tmp/lineup.json"),
        ]);

        assert_eq!(config.api_base_url, "https://league.test");
        assert_eq!(config.csrf_token.as_deref(), Some("abc"));
        assert_eq!(config.mobile_breakpoint, 1024);
        assert_eq!(config.resize_debounce_ms, 50);
        assert_eq!(config.data_path, Some(PathBuf::from("data/home.json")));
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/lineup.json")));
        assert_eq!(config.script_path, None);

        let settings = config.session_settings();
        assert_eq!(settings.mobile_breakpoint, 1024);
        assert_eq!(settings.csrf_token.as_deref(), Some("abc"));
    }

    #[test]
    fn invalid_numbers_and_blank_values_fall_back() {
        let config = config_from(&[
            ("LINEUP_MOBILE_BREAKPOINT", "wide"),
            ("LINEUP_HTTP_TIMEOUT_SECS", "-5"),
            ("LINEUP_CSRF_TOKEN", "   "),
        ]);

        assert_eq!(config.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT);
        assert_eq!(config.http_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.csrf_token, None);
    }
}
