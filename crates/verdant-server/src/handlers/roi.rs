//! ROI report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use verdant_core::{CarbonReport, ComparisonReport, ForecastReport, RoiAnalysis};

use super::user_records;
use crate::{AppError, AppState};

/// Longest forecast a client may request
const MAX_FORECAST_STEPS: usize = 120;

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Projected points (defaults to the configured roi_forecast_steps)
    pub steps: Option<usize>,
}

/// GET /api/roi/analyze - Investment, savings, payback, projection, per-type stats
pub async fn roi_analyze(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<RoiAnalysis>, AppError> {
    let records = user_records(&state, &headers)?;
    Ok(Json(state.engine.roi_analysis(&records)))
}

/// GET /api/roi/forecast - Linear ROI projection over simulation order
///
/// An empty `forecast` means there was not enough data to fit a line.
pub async fn roi_forecast(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ForecastQuery>,
    headers: HeaderMap,
) -> Result<Json<ForecastReport>, AppError> {
    let steps = match params.steps {
        Some(steps) if steps == 0 || steps > MAX_FORECAST_STEPS => {
            return Err(AppError::bad_request(&format!(
                "steps must be between 1 and {}",
                MAX_FORECAST_STEPS
            )));
        }
        Some(steps) => steps,
        None => state.engine.config().forecast.roi_forecast_steps,
    };

    let records = user_records(&state, &headers)?;
    Ok(Json(state.engine.roi_forecast_with_steps(&records, steps)))
}

/// GET /api/roi/carbon - Energy and CO2 avoided by the simulated savings
pub async fn roi_carbon(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<CarbonReport>, AppError> {
    let records = user_records(&state, &headers)?;
    Ok(Json(state.engine.carbon(&records)))
}

/// GET /api/roi/compare - Averages per business type
pub async fn roi_compare(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ComparisonReport>, AppError> {
    let records = user_records(&state, &headers)?;
    Ok(Json(state.engine.comparison(&records)))
}
