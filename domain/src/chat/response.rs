//! Chat response parsed from the backend payload

use serde::Deserialize;
use thiserror::Error;

/// Why a backend payload is not a usable chat response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("response has no message.content field")]
    MissingContent,

    #[error("response content is blank")]
    BlankContent,
}

#[derive(Deserialize)]
struct RawResponse {
    message: Option<RawMessage>,
}

#[derive(Deserialize)]
struct RawMessage {
    content: Option<String>,
}

/// Assistant reply with guaranteed non-blank content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    content: String,
}

impl ChatResponse {
    /// Parse `{"message": {"content": "..."}}`, ignoring any other fields.
    pub fn from_json(body: &[u8]) -> Result<Self, MalformedResponse> {
        let raw: RawResponse = serde_json::from_slice(body)
            .map_err(|e| MalformedResponse::InvalidJson(e.to_string()))?;

        let content = raw
            .message
            .and_then(|m| m.content)
            .ok_or(MalformedResponse::MissingContent)?;

        if content.trim().is_empty() {
            return Err(MalformedResponse::BlankContent);
        }

        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
