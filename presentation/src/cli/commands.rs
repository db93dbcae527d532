//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every stage's output
    #[default]
    Full,
    /// Only the moderator's summary
    Summary,
    /// JSON output
    Json,
}

/// HTTP strategy used to reach the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    /// Pooled reqwest client
    Managed,
    /// Hand-built requests on a hyper client (http:// only)
    Raw,
}

/// CLI arguments for design-council
#[derive(Parser, Debug)]
#[command(name = "design-council")]
#[command(
    author,
    version,
    about = "Design council - architect, security and moderator review a proposal"
)]
#[command(long_about = r#"
Design Council runs a fixed chain of LLM roles over a design topic.

The stages run in order, each one reading the previous answers:
1. Architect: proposes a design (availability, scalability, operations)
2. Security: reviews the proposal (threat model, OWASP Top 10, monitoring)
3. Moderator: summarises consensus, disagreements and next steps

Configuration is merged from (highest priority first):
1. COUNCIL_* environment variables (e.g. COUNCIL_BACKEND__BASE_URL)
2. --config <path>     Explicit config file
3. ./council.toml      Project-level config
4. ~/.config/design-council/config.toml   Global config

Example:
  design-council "high-availability checkout service"
  design-council --transport raw --base-url http://ai-server:11434 "payment gateway"
  design-council --serve 0.0.0.0:8080
"#)]
pub struct Cli {
    /// The design topic to analyse (not required with --serve)
    pub topic: Option<String>,

    /// Start the HTTP API instead of running one analysis
    #[arg(long, value_name = "ADDR", num_args = 0..=1)]
    pub serve: Option<Option<String>>,

    /// HTTP strategy for backend calls
    #[arg(long, value_enum)]
    pub transport: Option<TransportArg>,

    /// Base address of the inference backend
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Connect and read timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of every stage to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}
