//! Simulation formula
//!
//! Turns a business's component list into ROI, green score and monthly
//! energy. Investment and savings are left for the analytics to estimate.

use crate::models::{Component, NewSimulation};

/// Days per billing month used to scale daily consumption
const DAYS_PER_MONTH: f64 = 30.0;

/// Run a simulation for a set of components
pub fn run_simulation(business_type: Option<&str>, components: Vec<Component>) -> NewSimulation {
    let daily_wh: f64 = components.iter().map(|c| c.watt * c.hours).sum();
    let energy = daily_wh / 1000.0 * DAYS_PER_MONTH;

    let has_components = !components.is_empty();
    let roi = 5.0 + if has_components { 50.0 } else { 0.0 } - energy / 5000.0;
    let green_score = 40.0 + if has_components { 60.0 } else { 0.0 } - energy / 2000.0;

    NewSimulation {
        business_type: business_type
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        roi: Some(roi),
        green_score: Some(green_score),
        energy: Some(energy),
        investment: None,
        savings: None,
        components,
        created_at: None,
    }
}
