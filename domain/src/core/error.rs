//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("proposal 不可為空")]
    InvalidTopic,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid temperature {value} for role {role}: must be within 0.0..=1.0")]
    InvalidTemperature { role: String, value: f32 },
}
