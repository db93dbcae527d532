//! Connection settings shared by both transports

use std::time::Duration;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default connect and read timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Path of the chat endpoint, relative to the base address
const CHAT_PATH: &str = "/api/chat";

/// Where and how to reach the inference backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl BackendSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the credential sent as bearer token and `X-API-KEY`.
    ///
    /// Blank keys are treated as no key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base_url}/api/chat`, tolerating a trailing slash on the base
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_PATH)
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
