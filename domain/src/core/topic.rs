//! Topic value object

use super::error::DomainError;
use serde::Serialize;

/// A topic to be analyzed by the council (Value Object)
///
/// Always non-blank. Blank input is rejected with
/// [`DomainError::InvalidTopic`] before any stage runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a new topic, rejecting empty or whitespace-only content
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidTopic);
        }
        Ok(Self { content })
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Topic {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Topic::new(s)
    }
}

impl TryFrom<String> for Topic {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Topic::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let topic = Topic::new("high-availability checkout service").unwrap();
        assert_eq!(topic.content(), "high-availability checkout service");
    }

    #[test]
    fn test_topic_keeps_surrounding_whitespace() {
        let topic = Topic::new("  cache layer ").unwrap();
        assert_eq!(topic.content(), "  cache layer ");
    }

    #[test]
    fn test_blank_topic_rejected() {
        assert_eq!(Topic::new(""), Err(DomainError::InvalidTopic));
        assert_eq!(Topic::new(" \n\t "), Err(DomainError::InvalidTopic));
    }

    #[test]
    fn test_try_from() {
        let topic: Topic = "payments".try_into().unwrap();
        assert_eq!(topic.to_string(), "payments");
        assert!(Topic::try_from(String::new()).is_err());
    }
}
