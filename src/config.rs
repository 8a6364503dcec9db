//! Runtime configuration. The API base URL is required: without it the app
//! refuses to mount. The token refresh threshold defaults to 300 seconds.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_TOKEN_REFRESH_THRESHOLD_SECS: i64 = 300;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub token_refresh_threshold_secs: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL is not configured; set API_BASE_URL or ship a config.json")]
    MissingApiBaseUrl,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static REFRESH_THRESHOLD: OnceLock<i64> = OnceLock::new();

/// Seconds-before-expiry window that triggers proactive token renewal.
pub fn token_refresh_threshold_secs() -> i64 {
    REFRESH_THRESHOLD
        .get()
        .copied()
        .unwrap_or(DEFAULT_TOKEN_REFRESH_THRESHOLD_SECS)
}

pub async fn await_api_base_url() -> Option<String> {
    if let Some(cached) = API_BASE_URL.get() {
        return Some(cached.clone());
    }
    let snapshot = load_runtime_config().await;
    if let Some(threshold) = snapshot.token_refresh_threshold_secs {
        let _ = REFRESH_THRESHOLD.set(threshold);
    }
    let url = snapshot.api_base_url?;
    let _ = API_BASE_URL.set(url.clone());
    Some(url)
}

/// Resolves and caches the runtime configuration. Fatal when no API base URL
/// can be found anywhere.
pub async fn init() -> Result<(), ConfigError> {
    match await_api_base_url().await {
        Some(url) => {
            log::info!("API base URL: {}", url);
            Ok(())
        }
        None => Err(ConfigError::MissingApiBaseUrl),
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> RuntimeConfig {
    if let Some(cfg) = snapshot_from_globals() {
        return cfg;
    }
    fetch_runtime_config().await.unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

// Expects optional globals injected by the hosting page:
//   window.__VERSIONBOARD_ENV    = { API_BASE_URL, TOKEN_REFRESH_THRESHOLD }
//   window.__VERSIONBOARD_CONFIG = { api_base_url, token_refresh_threshold_secs }
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    let window = web_sys::window()?;

    let read_str = |obj: &js_sys::Object, key: &str| -> Option<String> {
        js_sys::Reflect::get(obj, &key.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    };

    for (global, url_key, threshold_key) in [
        ("__VERSIONBOARD_ENV", "API_BASE_URL", "TOKEN_REFRESH_THRESHOLD"),
        ("__VERSIONBOARD_CONFIG", "api_base_url", "token_refresh_threshold_secs"),
    ] {
        let Ok(any) = js_sys::Reflect::get(&window, &global.into()) else {
            continue;
        };
        if any.is_undefined() || any.is_null() {
            continue;
        }
        let obj = js_sys::Object::from(any);
        if let Some(url) = read_str(&obj, url_key) {
            let threshold = read_str(&obj, threshold_key).and_then(|raw| raw.parse().ok());
            return Some(RuntimeConfig {
                api_base_url: Some(url),
                token_refresh_threshold_secs: threshold,
            });
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}
