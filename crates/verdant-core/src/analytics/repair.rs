//! Record repair strategies
//!
//! Stored records can lack any numeric field. Analytics never reject a record
//! for that; a strategy decides what the missing value becomes.

use crate::models::SimulationRecord;

use super::mean;

/// How missing numeric fields are filled in
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RepairStrategy {
    /// Every missing field is 0
    #[default]
    ZeroFill,
    /// Synthesize missing financials (used by the ROI analysis)
    ///
    /// `roi`, `green_score` and `energy` still zero-fill for averaging. A
    /// missing or zero `investment` becomes `default_investment`; a missing or
    /// zero `savings` becomes `investment * roi/100 * green/100`, where a
    /// missing or zero roi/green is replaced by the set's mean for that
    /// derivation only.
    EstimateFromRoi { default_investment: f64 },
}

/// Numeric fields of one record after repair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RepairedMetrics {
    pub roi: f64,
    pub green_score: f64,
    pub energy: f64,
    pub investment: f64,
    pub savings: f64,
}

impl RepairedMetrics {
    fn zero_filled(record: &SimulationRecord) -> Self {
        Self {
            roi: record.roi.unwrap_or(0.0),
            green_score: record.green_score.unwrap_or(0.0),
            energy: record.energy.unwrap_or(0.0),
            investment: record.investment.unwrap_or(0.0),
            savings: record.savings.unwrap_or(0.0),
        }
    }
}

/// Present and non-zero
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

impl RepairStrategy {
    /// Repair every record, preserving order
    pub fn repair_all(&self, records: &[SimulationRecord]) -> Vec<RepairedMetrics> {
        let zero_filled: Vec<RepairedMetrics> =
            records.iter().map(RepairedMetrics::zero_filled).collect();

        match *self {
            RepairStrategy::ZeroFill => zero_filled,
            RepairStrategy::EstimateFromRoi { default_investment } => {
                let count = zero_filled.len();
                let mean_roi = mean(zero_filled.iter().map(|m| m.roi).sum(), count);
                let mean_green = mean(zero_filled.iter().map(|m| m.green_score).sum(), count);

                records
                    .iter()
                    .zip(zero_filled)
                    .map(|(record, base)| {
                        let roi = nonzero(record.roi).unwrap_or(mean_roi);
                        let green = nonzero(record.green_score).unwrap_or(mean_green);
                        let investment =
                            nonzero(record.investment).unwrap_or(default_investment);
                        let savings = nonzero(record.savings)
                            .unwrap_or(investment * (roi / 100.0) * (green / 100.0));

                        RepairedMetrics {
                            investment,
                            savings,
                            ..base
                        }
                    })
                    .collect()
            }
        }
    }
}
