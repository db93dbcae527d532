//! Final result of a council run.

use crate::core::topic::Topic;
use crate::prompt::PromptVars;
use crate::role::vars;
use serde::Serialize;
use thiserror::Error;

/// A transcript is missing a stage output the result needs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transcript has no `{0}` output")]
pub struct IncompleteTranscript(pub String);

/// Complete output of one analysis (Value Object)
///
/// Can only be assembled from a transcript in which every stage produced
/// its output, so a partially failed run never yields one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    topic: String,
    architect_opinion: String,
    security_review: String,
    moderator_summary: String,
}

impl AnalysisResult {
    /// Assemble a result from the variables accumulated across all stages
    pub fn assemble(topic: &Topic, transcript: &PromptVars) -> Result<Self, IncompleteTranscript> {
        let take = |name: &str| {
            transcript
                .get(name)
                .map(str::to_string)
                .ok_or_else(|| IncompleteTranscript(name.to_string()))
        };

        Ok(Self {
            topic: topic.content().to_string(),
            architect_opinion: take(vars::ARCHITECT_OPINION)?,
            security_review: take(vars::SECURITY_REVIEW)?,
            moderator_summary: take(vars::MODERATOR_SUMMARY)?,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn architect_opinion(&self) -> &str {
        &self.architect_opinion
    }

    pub fn security_review(&self) -> &str {
        &self.security_review
    }

    pub fn moderator_summary(&self) -> &str {
        &self.moderator_summary
    }
}
