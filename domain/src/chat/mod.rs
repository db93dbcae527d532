//! Chat message types exchanged with the inference backend.
//!
//! - [`ChatMessage`] / [`ChatRole`]: one turn of a conversation
//! - [`ChatRequest`]: a validated request (model + ordered messages)
//! - [`ChatResponse`]: a validated reply with non-blank content

mod message;
mod request;
mod response;

pub use message::{ChatMessage, ChatRole};
pub use request::{ChatOptions, ChatRequest, InvalidChatRequest};
pub use response::{ChatResponse, MalformedResponse};
