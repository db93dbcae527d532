//! CLI entrypoint for Design Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{
    ConversationLogger, NoConversationLogger, RunAnalysisError, RunAnalysisUseCase,
};
use council_domain::Topic;
use council_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OllamaTransport, TransportKind,
    mask_header_value,
};
use council_presentation::{
    Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress, TransportArg, router,
    serve,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_overrides(&cli, &mut config);

    if cli.show_config {
        show_config(&cli, &config);
        return Ok(ExitCode::SUCCESS);
    }

    config.validate().context("Invalid configuration")?;
    let roles = config.role_profiles()?;

    // === Dependency Injection ===
    let transport = OllamaTransport::new(config.backend.transport, config.backend.to_settings())
        .context("Failed to build backend transport")?;

    let logger: Arc<dyn ConversationLogger> = match &config.logging.transcript_path {
        Some(path) => {
            let logger = JsonlConversationLogger::open(path)?;
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let transport_kind = transport.kind();
    let use_case = RunAnalysisUseCase::new(Arc::new(transport), roles).with_logger(logger);
    info!(
        transport = %transport_kind,
        base_url = %config.backend.base_url,
        stages = use_case.roles().len(),
        "Starting Design Council"
    );

    // Server mode
    if let Some(addr) = &cli.serve {
        let addr = addr.clone().unwrap_or_else(|| config.server.listen.clone());
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        serve(listener, router(use_case), shutdown_signal()).await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single topic mode - topic is required
    let topic = match cli.topic.as_deref() {
        Some(t) => Topic::new(t)?,
        None => bail!("A topic is required. Use --serve to start the HTTP API."),
    };

    if !cli.quiet && cli.output != OutputFormat::Json {
        println!();
        println!("+============================================================+");
        println!("|           Design Council                                   |");
        println!("+============================================================+");
        println!();
        println!("Topic: {}", topic);
        println!();
    }

    // Ctrl-C drops the in-flight backend call
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling analysis");
            canceller.cancel();
        }
    });
    let use_case = use_case.with_cancellation(token);

    let outcome = if cli.quiet {
        use_case.execute(topic).await
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(topic, &progress).await
    } else {
        // Plain lines when stderr is piped or captured
        use_case.execute_with_progress(topic, &SimpleProgress).await
    };

    let result = match outcome {
        Ok(result) => result,
        Err(RunAnalysisError::Failed(failure)) => {
            eprint!("{}", ConsoleFormatter::format_failure(&failure));
            return Ok(ExitCode::FAILURE);
        }
        Err(RunAnalysisError::Cancelled) => {
            eprintln!("Cancelled.");
            return Ok(ExitCode::from(130));
        }
        Err(e) => return Err(e.into()),
    };

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(ExitCode::SUCCESS)
}

/// Command-line flags take precedence over every configuration source
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.backend.timeout_seconds = timeout;
    }
    if let Some(transport) = cli.transport {
        config.backend.transport = match transport {
            TransportArg::Managed => TransportKind::Managed,
            TransportArg::Raw => TransportKind::Raw,
        };
    }
    if let Some(path) = &cli.transcript {
        config.logging.transcript_path = Some(path.clone());
    }
}

fn show_config(cli: &Cli, config: &FileConfig) {
    for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
        println!("{}", line);
    }

    let backend = &config.backend;
    println!();
    println!("Effective backend:");
    println!("  base_url:        {}", backend.base_url);
    println!("  transport:       {}", backend.transport);
    println!("  timeout_seconds: {}", backend.timeout_seconds);
    println!(
        "  api_key:         {} (env {})",
        mask_header_value(backend.resolve_api_key().as_deref()),
        backend.api_key_env
    );
    println!("Server listen:     {}", config.server.listen);

    match config.role_profiles() {
        Ok(roles) => {
            println!("Council:");
            for (index, role) in roles.iter().enumerate() {
                println!(
                    "  {}. {} ({}, temperature {}) -> {{{}}}",
                    index + 1,
                    role.name(),
                    role.model(),
                    role.temperature(),
                    role.output_key()
                );
            }
        }
        Err(e) => println!("Council: invalid ({})", e),
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
