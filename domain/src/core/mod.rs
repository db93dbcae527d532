//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: inference models served by the backend
//! - [`topic::Topic`]: a validated topic to put before the council
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod topic;
