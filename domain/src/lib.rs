//! Domain layer for design-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council is an ordered list of [`RoleProfile`]s. Each role answers in turn,
//! and its reply becomes a named variable for the prompts of later roles:
//!
//! - **Architect**: proposes a design for the topic
//! - **Security**: critiques the architect's proposal
//! - **Moderator**: reconciles both into a consensus summary
//!
//! ## Diagnostics
//!
//! Failures are classified into [`FailureKind`]s, and [`diagnose`] attaches a
//! remediation hint when a failure matches a known misconfiguration.

pub mod analysis;
pub mod chat;
pub mod core;
pub mod diagnostics;
pub mod prompt;
pub mod role;

// Re-export commonly used types
pub use analysis::{AnalysisResult, IncompleteTranscript};
pub use chat::{
    ChatMessage, ChatOptions, ChatRequest, ChatResponse, ChatRole, InvalidChatRequest,
    MalformedResponse,
};
pub use core::{error::DomainError, model::Model, topic::Topic};
pub use diagnostics::{DiagnosticHint, FailureKind, diagnose, is_loopback_address};
pub use prompt::{PromptTemplate, PromptVars, TemplateError};
pub use role::{CouncilDefect, RoleProfile, check_council, vars};
