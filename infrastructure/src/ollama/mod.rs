//! Ollama-compatible inference backend
//!
//! Two interchangeable [`InferenceTransport`](council_application::InferenceTransport)
//! implementations talk to `POST {base_url}/api/chat`:
//!
//! - [`ManagedTransport`]: a pooled `reqwest` client with default headers
//! - [`RawTransport`]: requests built by hand on a `hyper` client
//!
//! [`OllamaTransport`] selects one at construction time.

mod error;
mod headers;
mod managed;
mod raw;
mod settings;
mod transport;

pub use error::TransportConfigError;
pub use headers::mask_header_value;
pub use managed::ManagedTransport;
pub use raw::RawTransport;
pub use settings::{BackendSettings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use transport::{OllamaTransport, TransportKind};
