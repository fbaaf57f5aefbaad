//! AI insight handlers

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;
use verdant_core::InsightsReport;

use super::user_records;
use crate::{AppError, AppState};

/// GET /api/ai/insights - Summary, 12-month ROI trend, energy mix, suggestions
pub async fn ai_insights(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<InsightsReport>, AppError> {
    let records = user_records(&state, &headers)?;
    Ok(Json(state.engine.ai_insights(&records, Utc::now())))
}
