//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Database initialization and shared utilities (open_db, load_engine)
//! - `import` - JSON record import
//! - `simulate` - Run and store a simulation
//! - `history` - List stored simulations
//! - `reports` - Analytics report output
//! - `reset` - Delete a user's history
//! - `serve` - Web server command

pub mod core;
pub mod history;
pub mod import;
pub mod reports;
pub mod reset;
pub mod serve;
pub mod simulate;

// Re-export command functions for main.rs
pub use core::*;
pub use history::*;
pub use import::*;
pub use reports::*;
pub use reset::*;
pub use serve::*;
pub use simulate::*;

/// Format an optional metric, "-" when absent
pub fn fmt_metric(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "-".to_string(),
    }
}
