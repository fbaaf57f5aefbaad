//! Analytics configuration
//!
//! Thresholds and constants used by the analytics engine.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for override in data dir (~/.local/share/verdant/config/analytics.toml)
//!    or an explicit path
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/analytics.toml");

/// Thresholds for the suggestion rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Green score above which sustainability is "excellent"
    pub green_excellent: f64,
    /// Green score above which sustainability is "good"
    pub green_good: f64,
    /// Mean monthly kWh at or above which usage is "high"
    pub energy_high: f64,
    /// Predicted growth above which the outlook is "strong"
    pub growth_strong: f64,
    /// Mean ROI above which performance is called out
    pub roi_outstanding: f64,
    /// Renewable share (%) below which solar capacity is suggested
    pub renewable_low_pct: f64,
    /// Grid share (%) above which grid dependency is called out
    pub grid_high_pct: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            green_excellent: 90.0,
            green_good: 70.0,
            energy_high: 2000.0,
            growth_strong: 5.0,
            roi_outstanding: 60.0,
            renewable_low_pct: 15.0,
            grid_high_pct: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of projected points in the ROI forecast report
    pub roi_forecast_steps: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            roi_forecast_steps: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonConfig {
    /// kg CO2 avoided per kWh
    pub emission_factor: f64,
    /// Currency units per kWh
    pub cost_per_kwh: f64,
}

impl Default for CarbonConfig {
    fn default() -> Self {
        Self {
            emission_factor: 0.82,
            cost_per_kwh: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    /// Investment assumed for records without one
    pub default_investment: f64,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            default_investment: 190_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Swing of the monthly ROI projection around the average
    pub amplitude: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { amplitude: 3.0 }
    }
}

/// Complete analytics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub insights: InsightThresholds,
    pub forecast: ForecastConfig,
    pub carbon: CarbonConfig,
    pub repair: RepairConfig,
    pub projection: ProjectionConfig,
}

impl AnalyticsConfig {
    /// Load configuration (override first, then embedded default)
    ///
    /// An explicit path that does not exist falls back to the default,
    /// matching the data-dir override behaviour.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let override_path = override_path
            .map(Path::to_path_buf)
            .or_else(default_config_path);

        let content = match override_path {
            Some(ref path) if path.exists() => {
                debug!(path = %path.display(), "Loading analytics config override");
                fs::read_to_string(path)
                    .map_err(|e| Error::InvalidData(format!("Failed to read config: {}", e)))?
            }
            _ => DEFAULT_CONFIG.to_string(),
        };

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.carbon.cost_per_kwh <= 0.0 {
            return Err(Error::InvalidData(
                "carbon.cost_per_kwh must be positive".to_string(),
            ));
        }
        if self.forecast.roi_forecast_steps == 0 {
            return Err(Error::InvalidData(
                "forecast.roi_forecast_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("verdant").join("config").join("analytics.toml"))
}
