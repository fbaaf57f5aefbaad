//! Analytics Engine - assembles the components into reports

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::models::SimulationRecord;

use super::aggregator::summarize;
use super::compare::compare;
use super::distribution::{classify, Distribution};
use super::forecast::{fit_line, linear_forecast, ForecastPoint};
use super::repair::RepairStrategy;
use super::reports::{
    CarbonReport, ComparisonReport, ForecastReport, InsightsReport, InsightsSummary,
    MonthForecast, MonthlyProjection, RoiAnalysis,
};
use super::round_to;
use super::suggestions::{synthesize, NO_SIMULATIONS_SUGGESTION};
use super::trend::{monthly_trend, trend_delta, TREND_MONTHS};

/// Builds every analytics report from a caller-supplied record set
///
/// Holds only immutable configuration, so one engine can be shared across
/// threads and requests.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Strategy used by the ROI analysis for missing financials
    pub fn estimate_strategy(&self) -> RepairStrategy {
        RepairStrategy::EstimateFromRoi {
            default_investment: self.config.repair.default_investment,
        }
    }

    /// Summary, monthly ROI trend, energy mix and suggestions
    pub fn ai_insights(&self, records: &[SimulationRecord], now: DateTime<Utc>) -> InsightsReport {
        let monthly_trends = monthly_trend(records, now);

        if records.is_empty() {
            return InsightsReport {
                summary: InsightsSummary::default(),
                monthly_trends,
                energy_distribution: Distribution::default(),
                suggestions: vec![NO_SIMULATIONS_SUGGESTION.to_string()],
            };
        }

        let summary = summarize(records, &RepairStrategy::ZeroFill);
        let roi_trend = trend_delta(&monthly_trends);
        let energy_distribution = classify(records);
        let suggestions = synthesize(
            &summary,
            roi_trend,
            &energy_distribution,
            &self.config.insights,
        );

        debug!(
            records = summary.count,
            roi_trend,
            suggestions = suggestions.len(),
            "Insights report built"
        );

        InsightsReport {
            summary: InsightsSummary {
                total_simulations: summary.count,
                avg_roi: round_to(summary.mean_roi, 2),
                avg_green_score: round_to(summary.mean_green_score, 2),
                avg_energy: round_to(summary.mean_energy, 1),
                roi_trend,
                predicted_growth: summary.predicted_growth,
            },
            monthly_trends,
            energy_distribution,
            suggestions,
        }
    }

    /// Investment, savings, payback and per business type statistics
    pub fn roi_analysis(&self, records: &[SimulationRecord]) -> RoiAnalysis {
        if records.is_empty() {
            return RoiAnalysis::default();
        }

        let summary = summarize(records, &self.estimate_strategy());
        let amplitude = self.config.projection.amplitude;

        let monthly_projection = (0..TREND_MONTHS)
            .map(|i| MonthlyProjection {
                month: format!("Month {}", i + 1),
                projected_roi: round_to(summary.mean_roi + (i as f64 / 2.0).sin() * amplitude, 2),
            })
            .collect();

        let business_stats = compare(records).iter().map(|g| g.rounded()).collect();

        debug!(
            records = summary.count,
            payback = summary.payback_ratio,
            "ROI analysis built"
        );

        RoiAnalysis {
            total_simulations: summary.count,
            avg_roi: round_to(summary.mean_roi, 2),
            avg_green_score: round_to(summary.mean_green_score, 2),
            total_investment: round_to(summary.total_investment, 0),
            estimated_savings: round_to(summary.total_savings, 2),
            payback_period: round_to(summary.payback_ratio, 1),
            avg_energy: round_to(summary.mean_energy, 1),
            co2_saved_kg: round_to(summary.mean_energy * self.config.carbon.emission_factor, 2),
            monthly_projection,
            business_stats,
        }
    }

    /// ROI projection using the configured number of steps
    pub fn roi_forecast(&self, records: &[SimulationRecord]) -> ForecastReport {
        self.roi_forecast_with_steps(records, self.config.forecast.roi_forecast_steps)
    }

    /// Fit ROI against simulation order (oldest = 1) and project forward
    ///
    /// Zero steps yields an empty report.
    pub fn roi_forecast_with_steps(
        &self,
        records: &[SimulationRecord],
        steps: usize,
    ) -> ForecastReport {
        if steps == 0 {
            return ForecastReport::default();
        }

        let mut ordered: Vec<&SimulationRecord> = records.iter().collect();
        ordered.sort_by_key(|r| r.created_at);

        let points: Vec<ForecastPoint> = ordered
            .iter()
            .enumerate()
            .map(|(i, r)| ForecastPoint::new((i + 1) as f64, r.roi.unwrap_or(0.0)))
            .collect();

        let Some(fit) = fit_line(&points) else {
            debug!(points = points.len(), "Not enough data for ROI forecast");
            return ForecastReport::default();
        };

        let forecast = linear_forecast(&points, steps)
            .into_iter()
            .map(|p| MonthForecast {
                month: format!("Month {}", p.index as usize),
                roi: round_to(p.value, 2),
            })
            .collect();

        ForecastReport {
            forecast,
            slope: Some(round_to(fit.slope, 4)),
            r_squared: Some(round_to(fit.r_squared, 4)),
        }
    }

    /// Energy and CO2 avoided by the simulated savings
    ///
    /// Uses stored savings; when none are stored, savings are estimated as
    /// investment * roi / 100.
    pub fn carbon(&self, records: &[SimulationRecord]) -> CarbonReport {
        if records.is_empty() {
            return CarbonReport::default();
        }

        let stored: f64 = records.iter().map(|r| r.savings.unwrap_or(0.0)).sum();
        let total_savings = if stored != 0.0 {
            stored
        } else {
            records
                .iter()
                .map(|r| r.investment.unwrap_or(0.0) * (r.roi.unwrap_or(0.0) / 100.0))
                .sum()
        };

        let carbon = &self.config.carbon;
        let kwh_saved = total_savings / carbon.cost_per_kwh;
        let kg_co2_saved = kwh_saved * carbon.emission_factor;

        CarbonReport {
            total_savings: round_to(total_savings, 2),
            kwh_saved: round_to(kwh_saved, 2),
            kg_co2_saved: round_to(kg_co2_saved, 2),
        }
    }

    /// Per business type averages, display rounded
    pub fn comparison(&self, records: &[SimulationRecord]) -> ComparisonReport {
        ComparisonReport {
            groups: compare(records).iter().map(|g| g.rounded()).collect(),
        }
    }
}
