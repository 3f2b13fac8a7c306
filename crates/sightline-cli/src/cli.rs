//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

/// Sightline - relay chart data and questions to a hosted language model
#[derive(Parser)]
#[command(name = "sightline")]
#[command(about = "Insight relay for chart data questions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the insight API server
    Serve {
        /// Port to listen on (defaults to the PORT environment variable, then 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Probe the configured provider
    Check {
        /// Ask one question over built-in sample chart data
        #[arg(short, long)]
        question: Option<String>,
    },
}
