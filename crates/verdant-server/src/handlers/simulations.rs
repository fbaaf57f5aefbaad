//! Simulation handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use tracing::info;
use verdant_core::{run_simulation, Component, SimulationRecord};

use crate::{get_user_id, AppError, AppState, MAX_PAGE_LIMIT};

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Request body for running a simulation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSimulationRequest {
    pub business_type: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// GET /api/simulations - The caller's history, newest first
pub async fn list_simulations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<SimulationRecord>>, AppError> {
    if params.limit <= 0 {
        return Err(AppError::bad_request("limit must be positive"));
    }

    let user_id = get_user_id(&headers);
    let limit = params.limit.min(MAX_PAGE_LIMIT);
    let records = state.db.list_simulations(&user_id, Some(limit))?;

    Ok(Json(records))
}

/// POST /api/simulations - Run a simulation and store the result
pub async fn create_simulation(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateSimulationRequest>,
) -> Result<Json<SimulationRecord>, AppError> {
    if let Some(bad) = body.components.iter().find(|c| !c.is_valid()) {
        return Err(AppError::bad_request(&format!(
            "Component '{}' must have non-negative watt and hours",
            bad.kind
        )));
    }

    let user_id = get_user_id(&headers);
    let sim = run_simulation(body.business_type.as_deref(), body.components);
    let id = state.db.insert_simulation(&user_id, &sim)?;

    info!(user = %user_id, id, "Simulation stored");

    let record = state.db.get_simulation(id)?;
    Ok(Json(record))
}
