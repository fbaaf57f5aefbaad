//! Verdant CLI - Sustainability simulator and analytics
//!
//! Usage:
//!   verdant init                        Initialize database
//!   verdant simulate --components JSON  Run and store a simulation
//!   verdant report insights             Print the insights report
//!   verdant reset --user alice --yes    Delete a user's history
//!   verdant serve --port 3000           Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

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
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Import { file, user } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_import(&db, &file, &user).map(|_| ())
        }
        Commands::Simulate {
            user,
            business_type,
            components,
        } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_simulate(&db, &user, business_type.as_deref(), &components).map(|_| ())
        }
        Commands::History { user, limit } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_history(&db, &user, limit)
        }
        Commands::Report { kind, user, json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            let engine = commands::load_engine(cli.config.as_deref())?;
            commands::cmd_report(&db, &engine, &user, kind, json)
        }
        Commands::Reset { user, yes } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_reset(&db, &user, yes).map(|_| ())
        }
        Commands::Serve {
            port,
            host,
            no_auth,
        } => {
            commands::cmd_serve(
                &cli.db,
                cli.config.as_deref(),
                &host,
                port,
                no_auth,
                cli.no_encrypt,
            )
            .await
        }
    }
}
