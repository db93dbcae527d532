//! Console output formatter for analysis results

use colored::Colorize;
use council_application::AnalysisFailure;
use council_domain::AnalysisResult;

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every stage's output
    pub fn format(result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Design Council Analysis"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            result.topic()
        ));

        output.push_str(&Self::section_header("Stage 1: Architect"));
        output.push_str(&format!("\n{}\n", result.architect_opinion().trim_end()));

        output.push_str(&Self::section_header("Stage 2: Security Review"));
        output.push_str(&format!("\n{}\n", result.security_review().trim_end()));

        output.push_str(&Self::section_header("Stage 3: Moderator Summary"));
        output.push_str(&format!("\n{}\n", result.moderator_summary().trim_end()));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON (`topic`, `architectOpinion`, `securityReview`, `moderatorSummary`)
    pub fn format_json(result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the moderator's summary only (concise output)
    pub fn format_summary(result: &AnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Design Council Summary ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n\n", "Topic:".bold(), result.topic()));
        output.push_str(result.moderator_summary().trim_end());
        output.push('\n');

        output
    }

    /// Format a failed analysis: the user message, then where it failed
    pub fn format_failure(failure: &AnalysisFailure) -> String {
        let mut output = format!("{} {}\n", "Error:".red().bold(), failure.user_message());
        output.push_str(&format!(
            "  {} {} (stage {}, model {})\n",
            "failed at".dimmed(),
            failure.stage(),
            failure.stage_index() + 1,
            failure.model()
        ));
        output.push_str(&format!(
            "  {} {}: {}\n",
            "cause".dimmed(),
            failure.kind(),
            failure.cause()
        ));
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
