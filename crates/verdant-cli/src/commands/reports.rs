//! Report command implementations

use anyhow::Result;
use chrono::{DateTime, Utc};
use verdant_core::analytics::{
    CarbonReport, ComparisonReport, ForecastReport, GroupSummary, InsightsReport, RoiAnalysis,
};
use verdant_core::{AnalyticsEngine, Database, SimulationRecord, SimulationRepository};

use crate::cli::ReportKind;

/// Build a report as JSON (the same shape the HTTP API returns)
pub fn report_json(
    engine: &AnalyticsEngine,
    records: &[SimulationRecord],
    kind: ReportKind,
    now: DateTime<Utc>,
) -> Result<serde_json::Value> {
    let value = match kind {
        ReportKind::Insights => serde_json::to_value(engine.ai_insights(records, now))?,
        ReportKind::Roi => serde_json::to_value(engine.roi_analysis(records))?,
        ReportKind::Forecast => serde_json::to_value(engine.roi_forecast(records))?,
        ReportKind::Carbon => serde_json::to_value(engine.carbon(records))?,
        ReportKind::Compare => serde_json::to_value(engine.comparison(records))?,
    };
    Ok(value)
}

pub fn cmd_report(
    db: &Database,
    engine: &AnalyticsEngine,
    user: &str,
    kind: ReportKind,
    json: bool,
) -> Result<()> {
    let records = db.find_by_user(user)?;
    let now = Utc::now();

    if json {
        let value = report_json(engine, &records, kind, now)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match kind {
        ReportKind::Insights => print_insights(&engine.ai_insights(&records, now)),
        ReportKind::Roi => print_roi(&engine.roi_analysis(&records)),
        ReportKind::Forecast => print_forecast(&engine.roi_forecast(&records)),
        ReportKind::Carbon => print_carbon(&engine.carbon(&records)),
        ReportKind::Compare => print_compare(&engine.comparison(&records)),
    }

    Ok(())
}

fn print_insights(report: &InsightsReport) {
    let s = &report.summary;

    println!();
    println!("🌱 Sustainability Insights");
    println!("   ─────────────────────────────────────────────");
    println!("   Simulations:      {}", s.total_simulations);
    println!("   Average ROI:      {:.2}%", s.avg_roi);
    println!("   Average green:    {:.2}", s.avg_green_score);
    println!("   Average energy:   {:.1} kWh/month", s.avg_energy);
    println!("   ROI trend:        {:+.1}", s.roi_trend);
    println!("   Predicted growth: {:.1} / 10", s.predicted_growth);

    let d = &report.energy_distribution;
    println!();
    println!(
        "   Energy mix: renewable {:.1}% │ grid {:.1}% │ other {:.1}%",
        d.renewable_pct, d.grid_pct, d.other_pct
    );

    println!();
    println!("   Monthly ROI:");
    for point in &report.monthly_trends {
        println!("   {:>9}  {:>7.1}", point.label, point.value);
    }

    println!();
    println!("💡 Suggestions");
    for suggestion in &report.suggestions {
        println!("   • {}", suggestion);
    }
}

fn print_roi(report: &RoiAnalysis) {
    println!();
    println!("💰 ROI Analysis");
    println!("   ─────────────────────────────────────────────");

    if report.total_simulations == 0 {
        println!("   No simulations yet.");
        return;
    }

    println!("   Simulations:       {}", report.total_simulations);
    println!("   Average ROI:       {:.2}%", report.avg_roi);
    println!("   Average green:     {:.2}", report.avg_green_score);
    println!("   Total investment:  {:.0}", report.total_investment);
    println!("   Estimated savings: {:.2}", report.estimated_savings);
    println!("   Payback period:    {:.1}", report.payback_period);
    println!("   Average energy:    {:.1} kWh/month", report.avg_energy);
    println!("   CO2 saved:         {:.2} kg", report.co2_saved_kg);

    println!();
    println!("   Projection:");
    for p in &report.monthly_projection {
        println!("   {:>9}  {:>7.2}%", p.month, p.projected_roi);
    }

    print_groups(&report.business_stats);
}

fn print_forecast(report: &ForecastReport) {
    println!();
    println!("📈 ROI Forecast");
    println!("   ─────────────────────────────────────────────");

    if report.is_insufficient() {
        println!("   Not enough data. Run at least two simulations.");
        return;
    }

    if let (Some(slope), Some(r2)) = (report.slope, report.r_squared) {
        println!("   Slope: {:+.4} per simulation (R² {:.4})", slope, r2);
    }
    for point in &report.forecast {
        println!("   {:>9}  {:>7.2}%", point.month, point.roi);
    }
}

fn print_carbon(report: &CarbonReport) {
    println!();
    println!("🌍 Carbon Impact");
    println!("   ─────────────────────────────────────────────");
    println!("   Savings:   {:.2}", report.total_savings);
    println!("   kWh saved: {:.2}", report.kwh_saved);
    println!("   CO2 saved: {:.2} kg", report.kg_co2_saved);
}

fn print_compare(report: &ComparisonReport) {
    println!();
    println!("🏢 Business Type Comparison");
    println!("   ─────────────────────────────────────────────");

    if report.groups.is_empty() {
        println!("   No simulations yet.");
        return;
    }
    print_groups(&report.groups);
}

fn print_groups(groups: &[GroupSummary]) {
    println!();
    println!(
        "   {:18} │ {:>5} │ {:>8} │ {:>7} │ {:>12} │ {:>10}",
        "Business type", "Count", "ROI %", "Green", "Investment", "Savings"
    );
    println!("   ───────────────────┼───────┼──────────┼─────────┼──────────────┼───────────");
    for g in groups {
        println!(
            "   {:18} │ {:>5} │ {:>8.2} │ {:>7.2} │ {:>12.0} │ {:>10.2}",
            g.business_type, g.count, g.avg_roi, g.avg_green_score, g.avg_investment, g.avg_savings
        );
    }
}
