use anyhow::Result;
use intent_relay::{config, server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Builds the log filter. A non-blank `RUST_LOG` is taken as a full filter
/// directive; otherwise the configured level is used.
fn resolve_log_filter(
    rust_log: Option<&str>,
    configured_level: &str,
) -> Result<(EnvFilter, String)> {
    match rust_log.map(str::trim).filter(|directive| !directive.is_empty()) {
        Some(directive) => {
            let filter = EnvFilter::try_new(directive).map_err(|e| {
                anyhow::anyhow!("Invalid RUST_LOG filter '{}': {}", directive, e)
            })?;
            Ok((filter, directive.to_string()))
        }
        None => {
            validate_log_level(configured_level)?;
            Ok((EnvFilter::try_new(configured_level)?, configured_level.to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log filter: environment variable overrides config
    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, log_level) =
        match resolve_log_filter(rust_log.as_deref(), &config.server.logs.level) {
            Ok(resolved) => resolved,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting intent relay with log level: {}", log_level);
    info!("Inference server: {}", config.ollama.host);

    if let Err(e) = server::run(config).await {
        error!("Server terminated abnormally: {}", e);
        std::process::exit(1);
    }

    info!("Server shut down successfully");
    Ok(())
}
