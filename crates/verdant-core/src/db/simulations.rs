//! Simulation history operations

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, warn};

use super::{format_datetime, parse_datetime, Database, SimulationRepository};
use crate::error::{Error, Result};
use crate::models::{Component, NewSimulation, SimulationRecord};

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, business_type, roi, green_score, energy,
           investment, savings, components, created_at
    FROM simulations
"#;

fn row_to_record(row: &Row) -> rusqlite::Result<SimulationRecord> {
    let id: i64 = row.get(0)?;
    let components_json: String = row.get(8)?;
    let created_at_str: String = row.get(9)?;

    let components: Vec<Component> = serde_json::from_str(&components_json).unwrap_or_else(|e| {
        warn!(id, error = %e, "Dropping unreadable component list");
        Vec::new()
    });

    let created_at = parse_datetime(&created_at_str).map_err(|e| {
        warn!(id, value = %created_at_str, "Unparseable created_at");
        rusqlite::Error::FromSqlConversionFailure(9, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(SimulationRecord {
        id,
        user_id: row.get(1)?,
        business_type: row.get(2)?,
        roi: row.get(3)?,
        green_score: row.get(4)?,
        energy: row.get(5)?,
        investment: row.get(6)?,
        savings: row.get(7)?,
        components,
        created_at,
    })
}

fn require_user(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(Error::InvalidData("user id must not be empty".to_string()));
    }
    Ok(())
}

impl Database {
    /// Store a simulation, returning its id
    ///
    /// `created_at` defaults to now when the simulation carries none.
    pub fn insert_simulation(&self, user_id: &str, sim: &NewSimulation) -> Result<i64> {
        require_user(user_id)?;
        let conn = self.conn()?;
        insert_with(&conn, user_id, sim)?;
        Ok(conn.last_insert_rowid())
    }

    /// Store a batch of simulations in one transaction, returning the count
    ///
    /// Any component with a negative or non-finite reading rejects the whole batch.
    pub fn import_simulations(&self, user_id: &str, sims: &[NewSimulation]) -> Result<usize> {
        require_user(user_id)?;
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        for sim in sims {
            insert_with(&tx, user_id, sim)?;
        }
        tx.commit()?;

        debug!(user_id, count = sims.len(), "Imported simulations");
        Ok(sims.len())
    }

    /// Fetch one simulation by id
    pub fn get_simulation(&self, id: i64) -> Result<SimulationRecord> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("{} WHERE id = ?", SELECT_COLUMNS),
            params![id],
            row_to_record,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("simulation {}", id)))
    }

    /// A user's simulations, newest first
    pub fn list_simulations(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<SimulationRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE user_id = ? ORDER BY created_at DESC, id DESC LIMIT ?",
            SELECT_COLUMNS
        ))?;

        // SQLite treats a negative LIMIT as unbounded
        let records = stmt
            .query_map(params![user_id, limit.unwrap_or(-1)], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    pub fn count_simulations(&self, user_id: &str) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM simulations WHERE user_id = ?",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Remove a user's whole history, returning the number of rows deleted
    pub fn delete_simulations_for_user(&self, user_id: &str) -> Result<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM simulations WHERE user_id = ?", params![user_id])?;
        debug!(user_id, deleted, "Deleted simulations");
        Ok(deleted)
    }
}

impl SimulationRepository for Database {
    fn find_by_user(&self, user_id: &str) -> Result<Vec<SimulationRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE user_id = ? ORDER BY created_at ASC, id ASC",
            SELECT_COLUMNS
        ))?;

        let records = stmt
            .query_map(params![user_id], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }
}

fn validate_components(sim: &NewSimulation) -> Result<()> {
    match sim.components.iter().find(|c| !c.is_valid()) {
        Some(bad) => Err(Error::InvalidData(format!(
            "Component '{}' must have non-negative watt and hours",
            bad.kind
        ))),
        None => Ok(()),
    }
}

fn insert_with(conn: &rusqlite::Connection, user_id: &str, sim: &NewSimulation) -> Result<()> {
    validate_components(sim)?;
    let components = serde_json::to_string(&sim.components)?;
    let created_at = format_datetime(&sim.created_at.unwrap_or_else(Utc::now));

    conn.execute(
        r#"
        INSERT INTO simulations (
            user_id, business_type, roi, green_score, energy,
            investment, savings, components, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            user_id,
            sim.business_type,
            sim.roi,
            sim.green_score,
            sim.energy,
            sim.investment,
            sim.savings,
            components,
            created_at,
        ],
    )?;
    Ok(())
}
