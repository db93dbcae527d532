//! HTTP surface
//!
//! `POST /api/v1/analyze` runs one analysis for a proposal; `GET /health`
//! answers liveness probes. Errors use a fixed `{timestamp, error, message}`
//! body so clients never see backend payloads.

mod error;
mod routes;

pub use error::{ApiError, ErrorBody};
pub use routes::{AnalyzeRequest, router, serve};
