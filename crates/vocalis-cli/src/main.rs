#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use std::net::SocketAddr;
use std::process;

use anyhow::Context;
use clap::Parser;

use crate::config::Cli;

/// Tracing target for server startup.
pub const TRACING_TARGET_STARTUP: &str = "vocalis_cli::startup";

/// Tracing target for server shutdown.
pub const TRACING_TARGET_SHUTDOWN: &str = "vocalis_cli::shutdown";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    // Development convenience, mirrors how the deployment injects env vars.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    telemetry::init_tracing()?;

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %addr,
        "Record service listening"
    );

    axum::serve(listener, vocalis_records::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "failed to install shutdown signal handler"
        );
    }
}
