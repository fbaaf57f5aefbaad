//! Insight Synthesizer: threshold rules producing recommendation text
//!
//! Rules run in a fixed order and each contributes at most one line. The first
//! four categories always fire (one branch each), the last three are optional
//! call-outs, so the output holds between 4 and 7 lines.

use crate::config::InsightThresholds;

use super::aggregator::SummaryResult;
use super::distribution::Distribution;

/// Shown instead of suggestions when the user has no simulations
pub const NO_SIMULATIONS_SUGGESTION: &str = "No simulations yet. Run a few to generate insights.";

/// Inputs shared by every rule
struct RuleInput<'a> {
    summary: &'a SummaryResult,
    roi_trend: f64,
    distribution: &'a Distribution,
    thresholds: &'a InsightThresholds,
}

type Rule = fn(&RuleInput<'_>) -> Option<&'static str>;

const RULES: &[Rule] = &[
    roi_trend_rule,
    green_score_rule,
    energy_rule,
    growth_rule,
    outstanding_roi_rule,
    low_renewable_rule,
    high_grid_rule,
];

fn roi_trend_rule(input: &RuleInput<'_>) -> Option<&'static str> {
    Some(if input.roi_trend < 0.0 {
        "ROI trend is declining. Review recent simulations for inefficiencies."
    } else if input.roi_trend > 0.0 {
        "ROI trend is improving. Maintain optimized resource use."
    } else {
        "ROI performance is stable. Consistent sustainability achieved."
    })
}

fn green_score_rule(input: &RuleInput<'_>) -> Option<&'static str> {
    let score = input.summary.mean_green_score;
    Some(if score > input.thresholds.green_excellent {
        "Excellent sustainability performance maintained!"
    } else if score > input.thresholds.green_good {
        "Good sustainability. Aim for a higher solar ratio."
    } else {
        "Increase renewables to boost green score and efficiency."
    })
}

fn energy_rule(input: &RuleInput<'_>) -> Option<&'static str> {
    Some(if input.summary.mean_energy < input.thresholds.energy_high {
        "Energy usage is efficiently balanced across systems."
    } else {
        "High energy use detected. Optimize AC and lighting schedules."
    })
}

fn growth_rule(input: &RuleInput<'_>) -> Option<&'static str> {
    Some(
        if input.summary.predicted_growth > input.thresholds.growth_strong {
            "Strong ROI forecast. Scale sustainable infrastructure."
        } else {
            "Moderate growth forecast. Fine-tune resource allocation."
        },
    )
}

fn outstanding_roi_rule(input: &RuleInput<'_>) -> Option<&'static str> {
    (input.summary.mean_roi > input.thresholds.roi_outstanding)
        .then_some("Outstanding ROI performance achieved. Monitor for consistency.")
}

fn low_renewable_rule(input: &RuleInput<'_>) -> Option<&'static str> {
    (input.distribution.renewable_pct < input.thresholds.renewable_low_pct)
        .then_some("Low solar contribution. Consider expanding renewable capacity.")
}

fn high_grid_rule(input: &RuleInput<'_>) -> Option<&'static str> {
    (input.distribution.grid_pct > input.thresholds.grid_high_pct)
        .then_some("High grid dependency. Solar could reduce operational cost.")
}

/// Build the ordered list of suggestions
pub fn synthesize(
    summary: &SummaryResult,
    roi_trend: f64,
    distribution: &Distribution,
    thresholds: &InsightThresholds,
) -> Vec<String> {
    let input = RuleInput {
        summary,
        roi_trend,
        distribution,
        thresholds,
    };

    RULES
        .iter()
        .filter_map(|rule| rule(&input))
        .map(str::to_string)
        .collect()
}
