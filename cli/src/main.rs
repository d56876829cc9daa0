//! clutch - lifecycle management for local Kubernetes clusters

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clutch_cli::app::AppContext;
use clutch_cli::cli::Cli;

/// Environment variable holding the tracing filter, e.g. `clutch_cli=debug`.
const LOG_ENV: &str = "CLUTCH_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (command, flags) = Cli::parse().into_parts();

    let app = match AppContext::new(&flags) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let token = app.call.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling in-flight calls");
            token.cancel();
        }
    });

    match command.run(&app).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
