//! Inference transport port
//!
//! Defines the interface for sending one chat request to the inference
//! backend. Adapters live in the infrastructure layer.

use async_trait::async_trait;
use council_domain::{ChatRequest, FailureKind, MalformedResponse};
use thiserror::Error;

/// Errors that can occur while talking to the inference backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// Network-level failure: refused, timed out, DNS
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("Backend returned status {status}: {body}")]
    Backend { status: u16, body: String },

    /// The backend answered with an unusable payload
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl InferenceError {
    /// The failure classification used for diagnostics
    pub fn kind(&self) -> FailureKind {
        match self {
            InferenceError::Transport(_) => FailureKind::Transport,
            InferenceError::Backend { .. } => FailureKind::Backend,
            InferenceError::Protocol(_) => FailureKind::Protocol,
        }
    }
}

impl From<MalformedResponse> for InferenceError {
    fn from(e: MalformedResponse) -> Self {
        InferenceError::Protocol(e.to_string())
    }
}

/// Sends chat requests to the inference backend
///
/// Implementations must be safe to share across concurrent analyses: no
/// per-request mutable state on the transport itself.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    /// Send the request and return the assistant's reply.
    ///
    /// The reply is never blank; blank content is a [`InferenceError::Protocol`].
    async fn chat(&self, request: &ChatRequest) -> Result<String, InferenceError>;

    /// Base address of the backend, used to diagnose failures
    fn base_url(&self) -> &str;
}
