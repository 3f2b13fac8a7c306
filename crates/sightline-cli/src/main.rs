//! Sightline CLI - chart insight relay
//!
//! Usage:
//!   sightline serve --port 8000   Start the insight API server
//!   sightline check               Probe the configured provider
//!   sightline check -q "..."      Round-trip one question over sample data

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve { port, host } => commands::cmd_serve(&host, port).await,
        Commands::Check { question } => commands::cmd_check(question.as_deref()).await,
    }
}
