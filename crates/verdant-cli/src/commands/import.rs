//! Import command implementation

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use verdant_core::{Database, NewSimulation};

/// Import a JSON array of simulation records for `user`
///
/// Records may omit any metric; missing `createdAt` means "now".
pub fn cmd_import(db: &Database, file: &Path, user: &str) -> Result<usize> {
    println!("📥 Importing simulations from {}...", file.display());

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records: Vec<NewSimulation> =
        serde_json::from_str(&content).context("Import file must be a JSON array of simulations")?;

    let count = db
        .import_simulations(user, &records)
        .context("Failed to store imported simulations")?;

    info!(user, count, "Import complete");
    println!("✅ Imported {} simulation(s) for {}", count, user);

    Ok(count)
}
