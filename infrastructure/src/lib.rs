//! Infrastructure layer for design-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP transports to the inference backend,
//! configuration file loading and the JSONL transcript logger.

pub mod config;
pub mod logging;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileRoleConfig, FileServerConfig,
};
pub use logging::{JsonlConversationLogger, TranscriptError};
pub use ollama::{
    BackendSettings, ManagedTransport, OllamaTransport, RawTransport, TransportConfigError,
    TransportKind, mask_header_value,
};
