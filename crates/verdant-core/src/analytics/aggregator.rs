//! Aggregator: reduce a record set to summary scalars

use serde::Serialize;

use crate::models::SimulationRecord;

use super::repair::RepairStrategy;
use super::{mean, round_to};

/// Upper bound of the predicted growth score
const MAX_PREDICTED_GROWTH: f64 = 10.0;

/// Summary statistics over a record set
///
/// Means and totals are unrounded; callers round for display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub count: usize,
    pub mean_roi: f64,
    pub mean_green_score: f64,
    pub mean_energy: f64,
    pub total_investment: f64,
    pub total_savings: f64,
    /// total_investment / total_savings, 0 when there are no savings
    pub payback_ratio: f64,
    /// Growth outlook in [0, 10], one decimal
    pub predicted_growth: f64,
}

/// Summarize a record set
pub fn summarize(records: &[SimulationRecord], strategy: &RepairStrategy) -> SummaryResult {
    if records.is_empty() {
        return SummaryResult::default();
    }

    let metrics = strategy.repair_all(records);
    let count = metrics.len();

    let mut roi_sum = 0.0;
    let mut green_sum = 0.0;
    let mut energy_sum = 0.0;
    let mut total_investment = 0.0;
    let mut total_savings = 0.0;

    for m in &metrics {
        roi_sum += m.roi;
        green_sum += m.green_score;
        energy_sum += m.energy;
        total_investment += m.investment;
        total_savings += m.savings;
    }

    let mean_roi = mean(roi_sum, count);
    let mean_green_score = mean(green_sum, count);

    let payback_ratio = if total_savings > 0.0 {
        total_investment / total_savings
    } else {
        0.0
    };

    SummaryResult {
        count,
        mean_roi,
        mean_green_score,
        mean_energy: mean(energy_sum, count),
        total_investment,
        total_savings,
        payback_ratio,
        predicted_growth: predicted_growth(mean_green_score, mean_roi),
    }
}

/// Growth outlook from the average green score and ROI
fn predicted_growth(mean_green_score: f64, mean_roi: f64) -> f64 {
    let raw = (mean_green_score / 100.0) * 6.0 + mean_roi / 20.0;
    round_to(raw.clamp(0.0, MAX_PREDICTED_GROWTH), 1)
}
