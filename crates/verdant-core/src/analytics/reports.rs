//! Serializable report payloads
//!
//! Values here are display-ready: rounding has already been applied.

use serde::{Deserialize, Serialize};

use super::compare::GroupSummary;
use super::distribution::Distribution;
use super::trend::TrendPoint;

/// Headline numbers of the insights report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsSummary {
    pub total_simulations: usize,
    pub avg_roi: f64,
    pub avg_green_score: f64,
    pub avg_energy: f64,
    pub roi_trend: f64,
    pub predicted_growth: f64,
}

/// Summary, 12-month trend, energy mix and suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub summary: InsightsSummary,
    pub monthly_trends: Vec<TrendPoint>,
    pub energy_distribution: Distribution,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    pub month: String,
    pub projected_roi: f64,
}

/// Financial analysis of all simulations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiAnalysis {
    pub total_simulations: usize,
    pub avg_roi: f64,
    pub avg_green_score: f64,
    pub total_investment: f64,
    pub estimated_savings: f64,
    pub payback_period: f64,
    pub avg_energy: f64,
    pub co2_saved_kg: f64,
    pub monthly_projection: Vec<MonthlyProjection>,
    pub business_stats: Vec<GroupSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthForecast {
    pub month: String,
    pub roi: f64,
}

/// Projected ROI for upcoming simulations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub forecast: Vec<MonthForecast>,
    /// Slope of the fitted line (ROI points per simulation)
    pub slope: Option<f64>,
    pub r_squared: Option<f64>,
}

impl ForecastReport {
    /// True when there was not enough data to fit a line
    pub fn is_insufficient(&self) -> bool {
        self.slope.is_none()
    }
}

/// Energy and CO2 avoided, derived from savings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonReport {
    pub total_savings: f64,
    pub kwh_saved: f64,
    pub kg_co2_saved: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub groups: Vec<GroupSummary>,
}
