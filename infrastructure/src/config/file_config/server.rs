//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Default listen address for `--serve`
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address the HTTP surface binds to
    pub listen: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
        }
    }
}
