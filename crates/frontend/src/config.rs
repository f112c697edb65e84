//! Frontend configuration.
//!
//! Defaults suit a backend on port 3000 of the page's host. Any field can
//! be overridden by storing a JSON object under `isp-portal-config` in
//! localStorage, e.g. `{"api_port": 8000, "api_prefix": "/api/v1"}`.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const CONFIG_STORAGE_KEY: &str = "isp-portal-config";
const MIN_POLL_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_port: u16,
    pub api_prefix: String,
    pub notification_poll_ms: u32,
    pub monitor_poll_ms: u32,
    /// Recorded as `created_by` on saved patterns.
    pub operator: Option<String>,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: 3000,
            api_prefix: "/api".to_string(),
            notification_poll_ms: 30_000,
            monitor_poll_ms: 10_000,
            operator: None,
            page_size: 50,
        }
    }
}

impl AppConfig {
    /// Parse an override document; unknown or invalid input yields defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<AppConfig>(raw) {
            Ok(cfg) => cfg.normalized(),
            Err(e) => {
                log::warn!("Ignoring invalid {}: {}", CONFIG_STORAGE_KEY, e);
                AppConfig::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        let prefix = self.api_prefix.trim().trim_end_matches('/');
        self.api_prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{}", prefix)
        };
        self.notification_poll_ms = self.notification_poll_ms.max(MIN_POLL_MS);
        self.monitor_poll_ms = self.monitor_poll_ms.max(MIN_POLL_MS);
        if self.page_size == 0 {
            self.page_size = AppConfig::default().page_size;
        }
        self
    }

    fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => AppConfig::from_json(&raw),
            None => AppConfig::default(),
        }
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide configuration, loaded on first access.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let cfg = AppConfig::from_json(r#"{"api_port": 8000, "operator": "noc"}"#);
        assert_eq!(cfg.api_port, 8000);
        assert_eq!(cfg.api_prefix, "/api");
        assert_eq!(cfg.operator.as_deref(), Some("noc"));
    }

    #[test]
    fn test_normalization() {
        let cfg = AppConfig::from_json(
            r#"{"api_prefix": "api/v1/", "notification_poll_ms": 10, "page_size": 0}"#,
        );
        assert_eq!(cfg.api_prefix, "/api/v1");
        assert_eq!(cfg.notification_poll_ms, MIN_POLL_MS);
        assert_eq!(cfg.page_size, 50);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(AppConfig::from_json("{not json"), AppConfig::default());
    }
}
