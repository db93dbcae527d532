//! Transport selection

use super::error::TransportConfigError;
use super::managed::ManagedTransport;
use super::raw::RawTransport;
use super::settings::BackendSettings;
use async_trait::async_trait;
use council_application::{InferenceError, InferenceTransport};
use council_domain::ChatRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which HTTP strategy talks to the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Pooled `reqwest` client
    #[default]
    Managed,
    /// Hand-built requests on a `hyper` client (http only)
    Raw,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Managed => "managed",
            TransportKind::Raw => "raw",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = TransportConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "managed" | "reqwest" => Ok(TransportKind::Managed),
            "raw" | "hyper" => Ok(TransportKind::Raw),
            _ => Err(TransportConfigError::UnknownKind(s.to_string())),
        }
    }
}

/// The configured transport; both variants are interchangeable
#[derive(Debug, Clone)]
pub enum OllamaTransport {
    Managed(ManagedTransport),
    Raw(RawTransport),
}

impl OllamaTransport {
    pub fn new(
        kind: TransportKind,
        settings: BackendSettings,
    ) -> Result<Self, TransportConfigError> {
        Ok(match kind {
            TransportKind::Managed => OllamaTransport::Managed(ManagedTransport::new(settings)?),
            TransportKind::Raw => OllamaTransport::Raw(RawTransport::new(settings)?),
        })
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            OllamaTransport::Managed(_) => TransportKind::Managed,
            OllamaTransport::Raw(_) => TransportKind::Raw,
        }
    }

    pub fn settings(&self) -> &BackendSettings {
        match self {
            OllamaTransport::Managed(t) => t.settings(),
            OllamaTransport::Raw(t) => t.settings(),
        }
    }
}

#[async_trait]
impl InferenceTransport for OllamaTransport {
    async fn chat(&self, request: &ChatRequest) -> Result<String, InferenceError> {
        match self {
            OllamaTransport::Managed(t) => t.chat(request).await,
            OllamaTransport::Raw(t) => t.chat(request).await,
        }
    }

    fn base_url(&self) -> &str {
        self.settings().base_url()
    }
}
