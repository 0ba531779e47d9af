//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `crimelab_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use crimelab_core::db::open_db_in_memory;
use crimelab_core::{CrimeService, SqliteCrimeRepository};
use std::error::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("crimelab_core smoke probe failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let conn = open_db_in_memory()?;
    let service = CrimeService::new(SqliteCrimeRepository::new(&conn));

    service.add_default_crimes()?;
    let crimes = service.list_crimes()?;

    println!("crimelab_core version={}", crimelab_core::core_version());
    println!("crimelab_core seeded_crimes={}", crimes.len());
    Ok(())
}
