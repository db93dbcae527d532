//! Backend configuration from TOML (`[backend]` section)

use crate::ollama::{BackendSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TransportKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable consulted for the API key when none is configured
pub const DEFAULT_API_KEY_ENV: &str = "AI_GATEWAY_API_KEY";

/// Raw backend configuration from TOML
///
/// # Example
///
/// ```toml
/// [backend]
/// base_url = "http://ai-server:11434"
/// api_key_env = "AI_GATEWAY_API_KEY"
/// timeout_seconds = 90
/// transport = "raw"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base address of the Ollama-compatible backend
    pub base_url: String,
    /// Direct API key (prefer `api_key_env`)
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Connect and read timeout for each call
    pub timeout_seconds: u64,
    /// HTTP strategy
    pub transport: TransportKind,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            transport: TransportKind::default(),
        }
    }
}

impl FileBackendConfig {
    /// The configured key, falling back to the `api_key_env` variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn to_settings(&self) -> BackendSettings {
        BackendSettings::new(self.base_url.trim())
            .with_api_key(self.resolve_api_key())
            .with_timeout(Duration::from_secs(self.timeout_seconds))
    }
}
