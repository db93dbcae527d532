//! Presentation layer for design-council
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the HTTP surface.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, TransportArg};
pub use http::{ApiError, ErrorBody, router, serve};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
