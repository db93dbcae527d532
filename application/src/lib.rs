//! Application layer for design-council
//!
//! This crate contains the analysis use case and the ports it drives.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    inference::{InferenceError, InferenceTransport},
    progress::{NoProgress, StageProgressNotifier},
};
pub use use_cases::run_analysis::{
    ANALYSIS_FAILED_MESSAGE, AnalysisFailure, RunAnalysisError, RunAnalysisUseCase,
};
