//! Domain models for Verdant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label used for records stored without a business type
pub const UNKNOWN_BUSINESS_TYPE: &str = "Unknown";

/// A powered component of a simulated business (panel, light, PC, HVAC...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Component type, e.g. "solar", "light", "pc", "hvac"
    #[serde(rename = "type")]
    pub kind: String,
    /// Rated power in watts
    #[serde(default)]
    pub watt: f64,
    /// Daily operating hours
    #[serde(default)]
    pub hours: f64,
}

impl Component {
    pub fn new(kind: impl Into<String>, watt: f64, hours: f64) -> Self {
        Self {
            kind: kind.into(),
            watt,
            hours,
        }
    }

    /// Watt and hours are finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.watt.is_finite() && self.hours.is_finite() && self.watt >= 0.0 && self.hours >= 0.0
    }
}

/// A stored simulation outcome
///
/// Numeric outcome fields are optional because older records (and imported
/// ones) may lack them. Analytics repair them through a
/// [`RepairStrategy`](crate::analytics::RepairStrategy) instead of rejecting
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: String,
    pub business_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub roi: Option<f64>,
    pub green_score: Option<f64>,
    /// Monthly consumption in kWh
    pub energy: Option<f64>,
    pub investment: Option<f64>,
    pub savings: Option<f64>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl SimulationRecord {
    /// Create an empty record (all metrics absent)
    pub fn new(id: i64, user_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            business_type: None,
            created_at,
            roi: None,
            green_score: None,
            energy: None,
            investment: None,
            savings: None,
            components: Vec::new(),
        }
    }

    pub fn with_business_type(mut self, business_type: impl Into<String>) -> Self {
        self.business_type = Some(business_type.into());
        self
    }

    pub fn with_roi(mut self, roi: f64) -> Self {
        self.roi = Some(roi);
        self
    }

    pub fn with_green_score(mut self, green_score: f64) -> Self {
        self.green_score = Some(green_score);
        self
    }

    pub fn with_energy(mut self, energy: f64) -> Self {
        self.energy = Some(energy);
        self
    }

    pub fn with_investment(mut self, investment: f64) -> Self {
        self.investment = Some(investment);
        self
    }

    pub fn with_savings(mut self, savings: f64) -> Self {
        self.savings = Some(savings);
        self
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Grouping key: the business type, or "Unknown" when absent or blank
    pub fn business_type_key(&self) -> &str {
        self.business_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_BUSINESS_TYPE)
    }
}

/// A simulation about to be stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSimulation {
    pub business_type: Option<String>,
    pub roi: Option<f64>,
    pub green_score: Option<f64>,
    pub energy: Option<f64>,
    pub investment: Option<f64>,
    pub savings: Option<f64>,
    #[serde(default)]
    pub components: Vec<Component>,
    /// Explicit creation time (imports); the store uses "now" when absent
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
