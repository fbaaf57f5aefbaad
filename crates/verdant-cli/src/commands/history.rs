//! History command implementation

use anyhow::{bail, Result};
use verdant_core::Database;

use super::fmt_metric;

pub fn cmd_history(db: &Database, user: &str, limit: i64) -> Result<()> {
    if limit <= 0 {
        bail!("--limit must be positive");
    }

    let records = db.list_simulations(user, Some(limit))?;
    let total = db.count_simulations(user)?;

    println!();
    println!("📜 Simulations for {} ({} of {})", user, records.len(), total);

    if records.is_empty() {
        println!("   No simulations yet. Run: verdant simulate --components '[...]'");
        return Ok(());
    }

    println!(
        "   {:>5} │ {:16} │ {:18} │ {:>8} │ {:>7} │ {:>9}",
        "ID", "Date", "Business type", "ROI %", "Green", "kWh/mo"
    );
    println!("   ──────┼──────────────────┼────────────────────┼──────────┼─────────┼──────────");

    for r in &records {
        println!(
            "   {:>5} │ {:16} │ {:18} │ {:>8} │ {:>7} │ {:>9}",
            r.id,
            r.created_at.format("%Y-%m-%d %H:%M"),
            r.business_type_key(),
            fmt_metric(r.roi, 2),
            fmt_metric(r.green_score, 1),
            fmt_metric(r.energy, 1),
        );
    }

    Ok(())
}
