//! Model value object representing an inference model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models served by the inference backend (Value Object)
///
/// The well-known variants are the models the default council uses;
/// anything else the backend serves is a [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama3,
    Mistral,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama3 => "llama3",
            Model::Mistral => "mistral",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (llama3)
    fn default() -> Self {
        Model::Llama3
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "" => return Err(DomainError::InvalidModel("model name cannot be empty".to_string())),
            "llama3" => Model::Llama3,
            "mistral" => Model::Mistral,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
