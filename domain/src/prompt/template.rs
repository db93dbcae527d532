//! Prompt templates with named placeholders

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while composing a prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template references undefined variable `{0}`")]
    MissingVariable(String),
}

/// Named values available for substitution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptVars {
    values: BTreeMap<String, String>,
}

impl PromptVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A user-turn template such as `主題：{topic}\n{review}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplate {
    text: String,
}

/// One piece of a parsed template
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Split the template into literal text and `{name}` placeholders.
    ///
    /// Braces that do not enclose a valid name are kept as literal text.
    fn segments(&self) -> Vec<Segment<'_>> {
        let text = self.text.as_str();
        let bytes = text.as_bytes();
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'{' {
                i += 1;
                continue;
            }
            let name_start = i + 1;
            let mut j = name_start;
            while j < bytes.len() && is_name_byte(bytes[j]) {
                j += 1;
            }
            if j > name_start && j < bytes.len() && bytes[j] == b'}' {
                if literal_start < i {
                    segments.push(Segment::Literal(&text[literal_start..i]));
                }
                segments.push(Segment::Placeholder(&text[name_start..j]));
                i = j + 1;
                literal_start = i;
            } else {
                i += 1;
            }
        }

        if literal_start < bytes.len() {
            segments.push(Segment::Literal(&text[literal_start..]));
        }
        segments
    }

    /// Names referenced by this template, in order of first appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in self.segments() {
            if let Segment::Placeholder(name) = segment
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        names
    }

    /// Substitute every placeholder with its value.
    ///
    /// Values are inserted verbatim; placeholders inside them are not expanded.
    pub fn compose(&self, vars: &PromptVars) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(self.text.len());
        for segment in self.segments() {
            match segment {
                Segment::Literal(s) => output.push_str(s),
                Segment::Placeholder(name) => {
                    let value = vars
                        .get(name)
                        .ok_or_else(|| TemplateError::MissingVariable(name.to_string()))?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }
}

impl From<&str> for PromptTemplate {
    fn from(s: &str) -> Self {
        PromptTemplate::new(s)
    }
}

impl std::fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_basic() {
        let template = PromptTemplate::new("主題：{topic}\n{review}");
        let vars = PromptVars::new().with("topic", "X").with("review", "Y");
        assert_eq!(template.compose(&vars).unwrap(), "主題：X\nY");
    }

    #[test]
    fn test_compose_order_independent() {
        let template = PromptTemplate::new("主題：{topic}\n{review}");
        let forward = PromptVars::new().with("topic", "X").with("review", "Y");
        let backward = PromptVars::new().with("review", "Y").with("topic", "X");
        assert_eq!(
            template.compose(&forward).unwrap(),
            template.compose(&backward).unwrap()
        );
    }

    #[test]
    fn test_compose_is_repeatable() {
        let template = PromptTemplate::new("{topic}/{topic}");
        let vars = PromptVars::new().with("topic", "a");
        let first = template.compose(&vars).unwrap();
        assert_eq!(first, "a/a");
        assert_eq!(template.compose(&vars).unwrap(), first);
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = PromptTemplate::new("opinion: {architectOpinion}");
        let vars = PromptVars::new()
            .with("architectOpinion", "use {topic} as the key")
            .with("topic", "SHOULD NOT APPEAR");
        assert_eq!(
            template.compose(&vars).unwrap(),
            "opinion: use {topic} as the key"
        );
    }

    #[test]
    fn test_missing_variable() {
        let template = PromptTemplate::new("{topic} and {securityReview}");
        let vars = PromptVars::new().with("topic", "t");
        assert_eq!(
            template.compose(&vars),
            Err(TemplateError::MissingVariable("securityReview".to_string()))
        );
    }

    #[test]
    fn test_malformed_braces_are_literal() {
        let template = PromptTemplate::new(r#"json: {"a": 1} {} { topic} {topic"#);
        let vars = PromptVars::new().with("topic", "t");
        assert_eq!(
            template.compose(&vars).unwrap(),
            r#"json: {"a": 1} {} { topic} {topic"#
        );
    }

    #[test]
    fn test_adjacent_and_nested_braces() {
        let template = PromptTemplate::new("{{topic}}{topic}");
        let vars = PromptVars::new().with("topic", "t");
        assert_eq!(template.compose(&vars).unwrap(), "{t}t");
    }

    #[test]
    fn test_placeholders_deduplicated_in_order() {
        let template = PromptTemplate::new("{topic} {architectOpinion} {topic} {securityReview}");
        assert_eq!(
            template.placeholders(),
            vec!["topic", "architectOpinion", "securityReview"]
        );
    }

    #[test]
    fn test_template_without_placeholders() {
        let template = PromptTemplate::new("no variables here");
        assert!(template.placeholders().is_empty());
        assert_eq!(template.compose(&PromptVars::new()).unwrap(), "no variables here");
    }
}
