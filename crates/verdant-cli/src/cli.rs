//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// User id shared with the server's unauthenticated mode
pub const DEFAULT_USER: &str = "local";

/// Verdant - Simulate and analyze sustainable business setups
#[derive(Parser)]
#[command(name = "verdant")]
#[command(about = "Sustainability simulator with ROI and green-score analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "verdant.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set VERDANT_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    /// Analytics config file (defaults to the data-dir override, then built-in values)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Import simulation records from a JSON array
    Import {
        /// JSON file to import
        #[arg(short, long)]
        file: PathBuf,

        /// Owner of the imported records
        #[arg(short, long, default_value = DEFAULT_USER)]
        user: String,
    },

    /// Run a simulation and store the result
    Simulate {
        #[arg(short, long, default_value = DEFAULT_USER)]
        user: String,

        /// Business type, e.g. "Cafe" or "Office"
        #[arg(short, long)]
        business_type: Option<String>,

        /// Components as JSON, e.g. '[{"type":"solar","watt":400,"hours":6}]'
        #[arg(short, long, default_value = "[]")]
        components: String,
    },

    /// Show stored simulations, newest first
    History {
        #[arg(short, long, default_value = DEFAULT_USER)]
        user: String,

        /// Maximum number of simulations to show
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// Generate an analytics report
    Report {
        /// Report to generate
        #[arg(value_enum)]
        kind: ReportKind,

        #[arg(short, long, default_value = DEFAULT_USER)]
        user: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a user's stored simulations
    Reset {
        #[arg(short, long, default_value = DEFAULT_USER)]
        user: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, every request must carry the x-verdant-user header.
        #[arg(long)]
        no_auth: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Summary, 12-month trend, energy mix and suggestions
    Insights,
    /// Investment, savings, payback and per-type stats
    Roi,
    /// Linear ROI projection
    Forecast,
    /// Energy and CO2 avoided
    Carbon,
    /// Averages per business type
    Compare,
}
