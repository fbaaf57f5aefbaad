//! Verdant Core Library
//!
//! Shared functionality for the Verdant sustainability simulator:
//! - Simulation analytics engine (summaries, monthly trends, forecasts,
//!   energy distribution, suggestions, business-type comparison)
//! - Simulation formula for new records
//! - Encrypted SQLite store for simulation history
//! - Analytics configuration with file overrides

pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod simulation;

pub use analytics::{
    AnalyticsEngine, CarbonReport, ComparisonReport, Distribution, ForecastPoint, ForecastReport,
    GroupSummary, InsightsReport, LinearFit, RepairStrategy, RoiAnalysis, SummaryResult,
    TrendPoint,
};
pub use config::AnalyticsConfig;
pub use db::{Database, SimulationRepository};
pub use error::{Error, Result};
pub use models::{Component, NewSimulation, SimulationRecord};
pub use simulation::run_simulation;
