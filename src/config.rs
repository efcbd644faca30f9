//! Board Configuration
//!
//! Read once at startup from an optional `window.COMMENT_BOARD_CONFIG` object.
//! Missing fields fall back to the defaults below.

use comment_pager::{DEFAULT_PAGE_SIZE, DEFAULT_REFRESH_INTERVAL_MS};
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the host page may define before the wasm bundle loads
const CONFIG_GLOBAL: &str = "COMMENT_BOARD_CONFIG";

const DEFAULT_API_HOST: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend base URL; `null` runs against the built-in demo store
    pub api_host: Option<String>,
    pub page_size: u32,
    pub refresh_interval_ms: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_host: Some(DEFAULT_API_HOST.to_string()),
            page_size: DEFAULT_PAGE_SIZE,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the page, falling back to defaults on any problem
    pub fn from_window() -> Self {
        match Self::try_from_window() {
            Ok(Some(config)) => config.normalized(),
            Ok(None) => Self::default(),
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring {}: {}", CONFIG_GLOBAL, e).into());
                Self::default()
            }
        }
    }

    fn try_from_window() -> Result<Option<Self>, String> {
        let window = web_sys::window().ok_or("no window")?;
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| format!("{:?}", e))?;
        if raw.is_undefined() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(raw)
            .map(Some)
            .map_err(|e| e.to_string())
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        if self.refresh_interval_ms == 0 {
            self.refresh_interval_ms = DEFAULT_REFRESH_INTERVAL_MS;
        }
        if let Some(host) = &self.api_host {
            let trimmed = host.trim().trim_end_matches('/');
            self.api_host = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
        self
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_host() {
        let config = AppConfig {
            api_host: Some(" http://example.com/ ".to_string()),
            page_size: 0,
            refresh_interval_ms: 0,
            ..AppConfig::default()
        }
        .normalized();

        assert_eq!(config.api_host.as_deref(), Some("http://example.com"));
        assert_eq!(config.page_size, 1);
        assert_eq!(config.refresh_interval_ms, DEFAULT_REFRESH_INTERVAL_MS);
    }

    #[test]
    fn test_blank_host_means_demo_store() {
        let config = AppConfig {
            api_host: Some("  ".to_string()),
            ..AppConfig::default()
        }
        .normalized();
        assert_eq!(config.api_host, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"page_size": 5, "api_host": null}"#).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.api_host, None);
        assert_eq!(config.refresh_interval_ms, DEFAULT_REFRESH_INTERVAL_MS);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
