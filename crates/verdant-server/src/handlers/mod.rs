//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod health;
pub mod insights;
pub mod roi;
pub mod simulations;

// Re-export all handlers for use in router
pub use health::*;
pub use insights::*;
pub use roi::*;
pub use simulations::*;

use axum::http::HeaderMap;
use tracing::debug;
use verdant_core::{SimulationRecord, SimulationRepository};

use crate::{get_user_id, AppError, AppState};

/// The calling user's full history, oldest first
pub(crate) fn user_records(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Vec<SimulationRecord>, AppError> {
    let user_id = get_user_id(headers);
    let records = state.db.find_by_user(&user_id)?;
    debug!(user = %user_id, records = records.len(), "Loaded simulation history");
    Ok(records)
}
