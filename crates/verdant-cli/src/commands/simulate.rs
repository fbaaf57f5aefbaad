//! Simulate command implementation

use anyhow::{bail, Context, Result};
use verdant_core::{run_simulation, Component, Database};

use super::fmt_metric;

/// Run a simulation from a JSON component list and store it
pub fn cmd_simulate(
    db: &Database,
    user: &str,
    business_type: Option<&str>,
    components_json: &str,
) -> Result<i64> {
    let components: Vec<Component> =
        serde_json::from_str(components_json).context("Invalid --components JSON")?;

    if let Some(bad) = components.iter().find(|c| !c.is_valid()) {
        bail!(
            "Component '{}' must have non-negative watt and hours",
            bad.kind
        );
    }

    let sim = run_simulation(business_type, components);
    let id = db.insert_simulation(user, &sim)?;

    println!("⚡ Simulation #{} stored", id);
    println!(
        "   Business type: {}",
        sim.business_type.as_deref().unwrap_or("-")
    );
    println!("   Energy:        {} kWh/month", fmt_metric(sim.energy, 1));
    println!("   ROI:           {}%", fmt_metric(sim.roi, 2));
    println!("   Green score:   {}", fmt_metric(sim.green_score, 2));

    Ok(id)
}
