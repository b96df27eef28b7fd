//! wayfarer: terminal client for the travel concierge chat.
//!
//! Resolves a durable session token, restores or greets the conversation,
//! then relays stdin lines as messages one exchange at a time.

mod app;
mod cli;
mod setup;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise the flag or config directive, then `wayfarer=info`.
fn log_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("wayfarer=info"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging exists; its error is reported once logging is up.
    let (config, config_err) = match setup::load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (wayfarer_config::WayfarerConfig::default(), Some(e)),
    };

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&log_directive))
        .init();

    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!("wayfarer v{} starting", env!("CARGO_PKG_VERSION"));

    match app::run(&args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("wayfarer: {e}");
            ExitCode::FAILURE
        }
    }
}
