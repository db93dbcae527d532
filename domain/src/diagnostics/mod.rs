//! Failure classification and troubleshooting hints
//!
//! [`FailureKind`] names the layer a stage failed in; [`diagnose`] maps a
//! failure message plus the configured backend address to a
//! [`DiagnosticHint`] when the pattern is a known misconfiguration.

mod classifier;
mod kind;

pub use classifier::{DiagnosticHint, diagnose, is_loopback_address};
pub use kind::FailureKind;
