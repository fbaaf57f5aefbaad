//! Simulation Analytics Engine
//!
//! Derives analytics from a user's stored simulation records. Every function
//! here is pure: records go in, values come out, nothing is cached.
//!
//! ## Components
//!
//! - **Aggregator** (`aggregator`) - summary scalars (means, totals, payback)
//! - **Time Bucketer** (`trend`) - 12-month ROI trend and trend delta
//! - **Linear Forecaster** (`forecast`) - least-squares projection
//! - **Distribution Classifier** (`distribution`) - renewable/grid/other split
//! - **Insight Synthesizer** (`suggestions`) - threshold-based recommendations
//! - **Group Comparator** (`compare`) - per business type averages
//!
//! Missing record fields are handled by a [`RepairStrategy`] (`repair`).
//! [`AnalyticsEngine`] assembles the components into serializable reports.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use verdant_core::analytics::AnalyticsEngine;
//!
//! let engine = AnalyticsEngine::default();
//! let records = db.find_by_user("alice")?;
//! let report = engine.ai_insights(&records, chrono::Utc::now());
//! ```

pub mod aggregator;
pub mod compare;
pub mod distribution;
pub mod engine;
pub mod forecast;
pub mod repair;
pub mod reports;
pub mod suggestions;
pub mod trend;

pub use aggregator::{summarize, SummaryResult};
pub use compare::{compare, GroupSummary};
pub use distribution::{classify, Distribution, EnergySource};
pub use engine::AnalyticsEngine;
pub use forecast::{fit_line, linear_forecast, ForecastPoint, LinearFit, DEFAULT_FUTURE_STEPS};
pub use repair::{RepairStrategy, RepairedMetrics};
pub use reports::{
    CarbonReport, ComparisonReport, ForecastReport, InsightsReport, InsightsSummary,
    MonthForecast, MonthlyProjection, RoiAnalysis,
};
pub use suggestions::synthesize;
pub use trend::{monthly_trend, trend_delta, TrendPoint, TREND_MONTHS};

/// Round to a fixed number of decimals for display
///
/// Never returns negative zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Arithmetic mean, 0 for an empty set
pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.333333, 1), 33.3);
        assert_eq!(round_to(2.675, 0), 3.0);
        assert_eq!(round_to(12.3456, 2), 12.35);
    }

    #[test]
    fn test_round_to_never_negative_zero() {
        let r = round_to(-0.004, 2);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(0.0, 0), 0.0);
        assert_eq!(mean(9.0, 3), 3.0);
    }
}
