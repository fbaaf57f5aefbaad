//! Time Bucketer: month-bucketed ROI trend

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::models::SimulationRecord;

use super::round_to;

/// Number of monthly slots in a trend series
pub const TREND_MONTHS: usize = 12;

/// Deltas smaller than this are reported as no change
const TREND_DEAD_ZONE: f64 = 0.05;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// One calendar month of the trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// "MMM-YYYY", e.g. "OCT-2026"
    pub label: String,
    /// Mean ROI of the month, one decimal (0 for months without records)
    pub value: f64,
}

/// Label for a (year, month) bucket
pub fn month_label(year: i32, month: u32) -> String {
    let index = (month.clamp(1, 12) - 1) as usize;
    format!("{}-{}", MONTH_ABBREVIATIONS[index], year)
}

/// Step `back` calendar months before (year, month)
fn months_before(year: i32, month: u32, back: u32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) - back as i32;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

/// Mean ROI per month for the 12 calendar months ending at `now`
///
/// Always returns exactly [`TREND_MONTHS`] points, oldest first. Records
/// outside the window are ignored.
pub fn monthly_trend(records: &[SimulationRecord], now: DateTime<Utc>) -> Vec<TrendPoint> {
    let mut groups: HashMap<(i32, u32), (f64, usize)> = HashMap::new();
    for record in records {
        let key = (record.created_at.year(), record.created_at.month());
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += record.roi.unwrap_or(0.0);
        entry.1 += 1;
    }

    (0..TREND_MONTHS as u32)
        .rev()
        .map(|back| {
            let (year, month) = months_before(now.year(), now.month(), back);
            let value = match groups.get(&(year, month)) {
                Some(&(sum, count)) if count > 0 => round_to(sum / count as f64, 1),
                _ => 0.0,
            };
            TrendPoint {
                label: month_label(year, month),
                value,
            }
        })
        .collect()
}

/// Change between the last two points of a series
///
/// Changes under 0.05 in magnitude are treated as noise and reported as 0;
/// anything else is rounded to one decimal.
pub fn trend_delta(series: &[TrendPoint]) -> f64 {
    let [.., previous, last] = series else {
        return 0.0;
    };

    let delta = last.value - previous.value;
    if delta.abs() < TREND_DEAD_ZONE {
        0.0
    } else {
        round_to(delta, 1)
    }
}
