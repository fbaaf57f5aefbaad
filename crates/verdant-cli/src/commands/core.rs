//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `load_engine` - Analytics engine from the resolved config
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use verdant_core::{AnalyticsConfig, AnalyticsEngine, Database};

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

/// Build the analytics engine from --config, the data-dir override, or defaults
pub fn load_engine(config_path: Option<&Path>) -> Result<AnalyticsEngine> {
    let config = AnalyticsConfig::load(config_path).context("Failed to load analytics config")?;
    Ok(AnalyticsEngine::new(config))
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_db(db_path, no_encrypt)?;

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Run a simulation: verdant simulate --business-type Cafe --components '[...]'");
    println!("  2. See the analytics: verdant report insights");
    println!("  3. Start the API: verdant serve");

    Ok(())
}
