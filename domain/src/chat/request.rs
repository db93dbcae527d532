//! Chat request sent to the `/api/chat` endpoint

use super::message::{ChatMessage, ChatRole};
use crate::core::model::Model;
use serde::Serialize;
use thiserror::Error;

/// Reasons a chat request cannot be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidChatRequest {
    #[error("model identifier cannot be empty")]
    EmptyModel,

    #[error("message list cannot be empty")]
    NoMessages,

    #[error("last message must come from the user, found {0}")]
    LastMessageNotFromUser(ChatRole),
}

/// Sampling options forwarded to the backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
}

/// A non-streaming chat request (Value Object)
///
/// Serializes to the backend wire shape
/// `{model, stream: false, messages: [...], options?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    model: Model,
    stream: bool,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<ChatOptions>,
}

impl ChatRequest {
    /// Build a request, checking the model is named and the conversation
    /// ends with a user turn.
    pub fn new(model: Model, messages: Vec<ChatMessage>) -> Result<Self, InvalidChatRequest> {
        if model.as_str().trim().is_empty() {
            return Err(InvalidChatRequest::EmptyModel);
        }
        match messages.last() {
            None => return Err(InvalidChatRequest::NoMessages),
            Some(last) if last.role != ChatRole::User => {
                return Err(InvalidChatRequest::LastMessageNotFromUser(last.role));
            }
            Some(_) => {}
        }

        Ok(Self {
            model,
            stream: false,
            messages,
            options: None,
        })
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options = Some(ChatOptions { temperature });
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn options(&self) -> Option<&ChatOptions> {
        self.options.as_ref()
    }

    pub fn is_streaming(&self) -> bool {
        self.stream
    }

    /// Content of the final user turn
    pub fn prompt(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest::new(
            Model::Mistral,
            vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
        )
        .unwrap()
        .with_temperature(0.1);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mistral");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert!((json["options"]["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_options_omitted_when_unset() {
        let request = ChatRequest::new(Model::Llama3, vec![ChatMessage::user("hi")]).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("options").is_none());
        assert!(!request.is_streaming());
    }

    #[test]
    fn test_empty_model_rejected() {
        let err = ChatRequest::new(Model::Custom(String::new()), vec![ChatMessage::user("hi")])
            .unwrap_err();
        assert_eq!(err, InvalidChatRequest::EmptyModel);
    }

    #[test]
    fn test_empty_messages_rejected() {
        let err = ChatRequest::new(Model::Llama3, vec![]).unwrap_err();
        assert_eq!(err, InvalidChatRequest::NoMessages);
    }

    #[test]
    fn test_must_end_with_user_turn() {
        let err = ChatRequest::new(
            Model::Llama3,
            vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")],
        )
        .unwrap_err();
        assert_eq!(err, InvalidChatRequest::LastMessageNotFromUser(ChatRole::Assistant));
    }

    #[test]
    fn test_prompt_is_last_user_turn() {
        let request = ChatRequest::new(
            Model::Llama3,
            vec![ChatMessage::system("sys"), ChatMessage::user("the prompt")],
        )
        .unwrap();
        assert_eq!(request.prompt(), "the prompt");
    }
}
