//! Group Comparator: per business type averages

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::SimulationRecord;

use super::{mean, round_to};

/// Aggregates for one business type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub business_type: String,
    pub count: usize,
    pub avg_roi: f64,
    pub avg_green_score: f64,
    pub avg_investment: f64,
    pub avg_savings: f64,
    pub total_investment: f64,
    pub total_savings: f64,
}

impl GroupSummary {
    /// Display rounding: ROI, green score and savings to 2 decimals,
    /// investment to whole units
    pub fn rounded(&self) -> Self {
        Self {
            business_type: self.business_type.clone(),
            count: self.count,
            avg_roi: round_to(self.avg_roi, 2),
            avg_green_score: round_to(self.avg_green_score, 2),
            avg_investment: round_to(self.avg_investment, 0),
            avg_savings: round_to(self.avg_savings, 2),
            total_investment: round_to(self.total_investment, 0),
            total_savings: round_to(self.total_savings, 2),
        }
    }
}

#[derive(Default)]
struct GroupAccumulator {
    count: usize,
    roi: f64,
    green: f64,
    investment: f64,
    savings: f64,
}

/// Group records by business type, sorted by type name
///
/// Missing fields count as zero. Records without a business type fall in the
/// "Unknown" group.
pub fn compare(records: &[SimulationRecord]) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<&str, GroupAccumulator> = BTreeMap::new();

    for record in records {
        let acc = groups.entry(record.business_type_key()).or_default();
        acc.count += 1;
        acc.roi += record.roi.unwrap_or(0.0);
        acc.green += record.green_score.unwrap_or(0.0);
        acc.investment += record.investment.unwrap_or(0.0);
        acc.savings += record.savings.unwrap_or(0.0);
    }

    groups
        .into_iter()
        .map(|(business_type, acc)| GroupSummary {
            business_type: business_type.to_string(),
            count: acc.count,
            avg_roi: mean(acc.roi, acc.count),
            avg_green_score: mean(acc.green, acc.count),
            avg_investment: mean(acc.investment, acc.count),
            avg_savings: mean(acc.savings, acc.count),
            total_investment: acc.investment,
            total_savings: acc.savings,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, business_type: Option<&str>, roi: f64) -> SimulationRecord {
        let r = SimulationRecord::new(id, "u", Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap())
            .with_roi(roi);
        match business_type {
            Some(t) => r.with_business_type(t),
            None => r,
        }
    }

    #[test]
    fn test_empty() {
        assert!(compare(&[]).is_empty());
    }

    #[test]
    fn test_groups_sorted_and_exhaustive() {
        let records = vec![
            record(1, Some("Retail"), 10.0),
            record(2, Some("Cafe"), 20.0),
            record(3, None, 5.0),
            record(4, Some("Retail"), 30.0),
            record(5, Some("Cafe"), 40.0),
        ];

        let groups = compare(&records);
        let names: Vec<&str> = groups.iter().map(|g| g.business_type.as_str()).collect();
        assert_eq!(names, vec!["Cafe", "Retail", "Unknown"]);

        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, records.len());

        let retail = &groups[1];
        assert_eq!(retail.count, 2);
        assert_eq!(retail.avg_roi, 20.0);
    }

    #[test]
    fn test_means_and_sums() {
        let records = vec![
            record(1, Some("Office"), 12.0)
                .with_green_score(60.0)
                .with_investment(1000.0)
                .with_savings(100.0),
            record(2, Some("Office"), 18.0)
                .with_green_score(80.0)
                .with_investment(3000.0),
        ];

        let groups = compare(&records);
        assert_eq!(groups.len(), 1);
        let office = &groups[0];
        assert_eq!(office.avg_roi, 15.0);
        assert_eq!(office.avg_green_score, 70.0);
        assert_eq!(office.avg_investment, 2000.0);
        assert_eq!(office.avg_savings, 50.0);
        assert_eq!(office.total_investment, 4000.0);
        assert_eq!(office.total_savings, 100.0);
    }

    #[test]
    fn test_rounded() {
        let records = vec![
            record(1, Some("Farm"), 10.0).with_investment(1000.4),
            record(2, Some("Farm"), 10.0).with_investment(1000.4),
            record(3, Some("Farm"), 11.0).with_investment(1000.4),
        ];
        let rounded = compare(&records)[0].rounded();
        assert_eq!(rounded.avg_roi, 10.33);
        assert_eq!(rounded.avg_investment, 1000.0);
    }
}
