//! Error types for the Ollama transports

use std::time::Duration;
use thiserror::Error;

/// A transport could not be built from its settings
#[derive(Error, Debug)]
pub enum TransportConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("The raw transport only supports http://, got '{0}'")]
    UnsupportedScheme(String),

    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Unknown transport '{0}' (expected 'managed' or 'raw')")]
    UnknownKind(String),
}

/// Render an error with its whole `source()` chain.
///
/// HTTP client errors keep the OS-level cause (e.g. "Connection refused")
/// several levels down.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Transport message for a call that exceeded its deadline
pub(crate) fn timed_out(uri: &str, timeout: Duration) -> String {
    format!("request to {uri} timed out after {timeout:?} (operation timed out)")
}
