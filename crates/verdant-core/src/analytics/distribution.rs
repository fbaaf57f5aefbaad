//! Distribution Classifier: share of component wattage by energy source

use serde::{Deserialize, Serialize};

use crate::models::SimulationRecord;

use super::round_to;

/// Energy source bucket of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    /// On-site generation ("solar")
    Renewable,
    /// Grid-powered loads ("light", "pc")
    Grid,
    /// Everything else
    Other,
}

impl EnergySource {
    /// Classify a component type (exact, case-sensitive match)
    pub fn from_component_type(kind: &str) -> Self {
        match kind {
            "solar" => EnergySource::Renewable,
            "light" | "pc" => EnergySource::Grid,
            _ => EnergySource::Other,
        }
    }
}

/// Percentage of total wattage per source, one decimal each
///
/// Sums to ~100 when any wattage exists, otherwise all zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub renewable_pct: f64,
    pub grid_pct: f64,
    pub other_pct: f64,
}

impl Distribution {
    pub fn pct(&self, source: EnergySource) -> f64 {
        match source {
            EnergySource::Renewable => self.renewable_pct,
            EnergySource::Grid => self.grid_pct,
            EnergySource::Other => self.other_pct,
        }
    }

    pub fn total(&self) -> f64 {
        self.renewable_pct + self.grid_pct + self.other_pct
    }
}

/// Classify every component of every record
pub fn classify(records: &[SimulationRecord]) -> Distribution {
    let mut renewable = 0.0;
    let mut grid = 0.0;
    let mut other = 0.0;

    for component in records.iter().flat_map(|r| r.components.iter()) {
        // Negative or non-finite readings contribute nothing
        let watt = if component.watt.is_finite() {
            component.watt.max(0.0)
        } else {
            0.0
        };
        match EnergySource::from_component_type(&component.kind) {
            EnergySource::Renewable => renewable += watt,
            EnergySource::Grid => grid += watt,
            EnergySource::Other => other += watt,
        }
    }

    let total = renewable + grid + other;
    let total = if total == 0.0 { 1.0 } else { total };
    let pct = |watts: f64| round_to(watts / total * 100.0, 1);

    Distribution {
        renewable_pct: pct(renewable),
        grid_pct: pct(grid),
        other_pct: pct(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Component;
    use chrono::{TimeZone, Utc};

    fn record_with(components: Vec<Component>) -> SimulationRecord {
        SimulationRecord::new(1, "u", Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap())
            .with_components(components)
    }

    #[test]
    fn test_source_classification() {
        assert_eq!(EnergySource::from_component_type("solar"), EnergySource::Renewable);
        assert_eq!(EnergySource::from_component_type("light"), EnergySource::Grid);
        assert_eq!(EnergySource::from_component_type("pc"), EnergySource::Grid);
        assert_eq!(EnergySource::from_component_type("hvac"), EnergySource::Other);
        assert_eq!(EnergySource::from_component_type("Solar"), EnergySource::Other);
    }

    #[test]
    fn test_even_split() {
        let records = vec![record_with(vec![
            Component::new("solar", 100.0, 0.0),
            Component::new("light", 50.0, 0.0),
            Component::new("pc", 50.0, 0.0),
            Component::new("hvac", 100.0, 0.0),
        ])];

        let dist = classify(&records);
        assert_eq!(dist.renewable_pct, 33.3);
        assert_eq!(dist.grid_pct, 33.3);
        assert_eq!(dist.other_pct, 33.3);
        assert!((dist.total() - 100.0).abs() <= 0.15);
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(classify(&[]), Distribution::default());
    }

    #[test]
    fn test_records_without_components_or_watts() {
        let records = vec![
            record_with(vec![]),
            record_with(vec![Component::new("solar", 0.0, 5.0)]),
        ];
        let dist = classify(&records);
        assert_eq!(dist, Distribution::default());
    }

    #[test]
    fn test_accumulates_across_records() {
        let records = vec![
            record_with(vec![Component::new("solar", 300.0, 6.0)]),
            record_with(vec![
                Component::new("light", 60.0, 10.0),
                Component::new("fridge", 40.0, 24.0),
            ]),
        ];

        let dist = classify(&records);
        assert_eq!(dist.pct(EnergySource::Renewable), 75.0);
        assert_eq!(dist.pct(EnergySource::Grid), 15.0);
        assert_eq!(dist.pct(EnergySource::Other), 10.0);
    }

    #[test]
    fn test_invalid_watts_are_ignored() {
        let records = vec![record_with(vec![
            Component::new("solar", 100.0, 4.0),
            Component::new("hvac", -100.0, 4.0),
            Component::new("pc", f64::NAN, 4.0),
            Component::new("light", f64::INFINITY, 4.0),
        ])];

        let dist = classify(&records);
        assert_eq!(dist.renewable_pct, 100.0);
        assert_eq!(dist.grid_pct, 0.0);
        assert_eq!(dist.other_pct, 0.0);
    }

    #[test]
    fn test_only_negative_watts_is_all_zero() {
        let records = vec![record_with(vec![Component::new("hvac", -250.0, 8.0)])];
        assert_eq!(classify(&records), Distribution::default());
    }
}
