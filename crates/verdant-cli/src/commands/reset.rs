//! Reset command implementation

use std::io::{self, Write};

use anyhow::Result;
use verdant_core::Database;

/// Delete a user's simulation history, returning the number of rows removed
pub fn cmd_reset(db: &Database, user: &str, yes: bool) -> Result<usize> {
    let total = db.count_simulations(user)?;
    if total == 0 {
        println!("No simulations stored for {}.", user);
        return Ok(0);
    }

    if !yes {
        println!("⚠️  This will delete all {} simulation(s) for {}.", total, user);
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(0);
        }
    }

    let deleted = db.delete_simulations_for_user(user)?;
    println!("🗑️  Deleted {} simulation(s) for {}", deleted, user);
    Ok(deleted)
}
