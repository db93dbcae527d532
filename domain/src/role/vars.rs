//! Well-known prompt variable names

/// The topic under analysis, available to every stage
pub const TOPIC: &str = "topic";

/// Output of the architect stage
pub const ARCHITECT_OPINION: &str = "architectOpinion";

/// Output of the security stage
pub const SECURITY_REVIEW: &str = "securityReview";

/// Output of the moderator stage
pub const MODERATOR_SUMMARY: &str = "moderatorSummary";

/// Outputs an [`AnalysisResult`](crate::AnalysisResult) is assembled from
pub const RESULT_FIELDS: [&str; 3] = [ARCHITECT_OPINION, SECURITY_REVIEW, MODERATOR_SUMMARY];
