//! Crime use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for embedding applications.
//! - Run the CSV bulk import and track its completion flag.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - `data_loaded_once` becomes true only after a fully successful import
//!   and is never persisted; it resets with the process.
//! - Import failures are logged at the boundary, never raised to callers.

use crate::import::csv::{parse_crime_line, ImportError};
use crate::model::crime::{Crime, CrimeId};
use crate::repo::crime_repo::{CrimeRepository, RepoResult};
use log::{error, info};
use std::io::BufRead;
use std::time::Instant;

const DEFAULT_CRIME_COUNT: usize = 100;

/// Use-case facade over a crime repository.
///
/// Constructed once by the embedding application with an explicit repository
/// (and thus connection) handle; there is no hidden global instance.
pub struct CrimeService<R: CrimeRepository> {
    repo: R,
    data_loaded_once: bool,
}

impl<R: CrimeRepository> CrimeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            data_loaded_once: false,
        }
    }

    /// Adds a new crime record.
    pub fn add_crime(&self, crime: &Crime) -> RepoResult<CrimeId> {
        self.repo.add_crime(crime)
    }

    /// Updates an existing crime by stable ID.
    ///
    /// Updating an ID with no matching row is a silent no-op.
    pub fn update_crime(&self, crime: &Crime) -> RepoResult<()> {
        self.repo.update_crime(crime)
    }

    /// Gets one crime by ID; `None` when no record matches.
    pub fn get_crime(&self, id: CrimeId) -> RepoResult<Option<Crime>> {
        self.repo.get_crime(id)
    }

    /// Lists all crime records in engine row order.
    pub fn list_crimes(&self) -> RepoResult<Vec<Crime>> {
        self.repo.list_crimes()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> RepoResult<bool> {
        self.repo.is_empty()
    }

    /// Returns whether a CSV bulk import has fully completed this process.
    pub fn is_data_loaded_once(&self) -> bool {
        self.data_loaded_once
    }

    /// Streams `uuid,title,date,solved` CSV lines into the store.
    ///
    /// # Contract
    /// - Best-effort: lines before a failure stay inserted, nothing is
    ///   rolled back.
    /// - Any failure stops the import at that line and leaves
    ///   `data_loaded_once` false; the error is logged, not returned.
    /// - A fully successful import sets `data_loaded_once` to true.
    pub fn load_crime_list(&mut self, input: impl BufRead) {
        let started_at = Instant::now();
        info!("event=csv_import module=service status=start");

        match self.import_crimes(input) {
            Ok(imported) => {
                self.data_loaded_once = true;
                info!(
                    "event=csv_import module=service status=ok lines={imported} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
            }
            Err(err) => {
                error!(
                    "event=csv_import module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
            }
        }
    }

    fn import_crimes(&self, input: impl BufRead) -> Result<usize, ImportError> {
        let mut imported = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let crime = parse_crime_line(&line, index + 1)?;
            self.repo.add_crime(&crime)?;
            imported += 1;
        }
        Ok(imported)
    }

    /// Seeds the store with `Crime #0`..`Crime #99`.
    ///
    /// # Contract
    /// - Even-indexed records are created solved, odd-indexed unsolved.
    pub fn add_default_crimes(&self) -> RepoResult<()> {
        for index in 0..DEFAULT_CRIME_COUNT {
            let mut crime = Crime::new(format!("Crime #{index}"));
            crime.solved = index % 2 == 0;
            self.repo.add_crime(&crime)?;
        }

        info!("event=default_seed module=service status=ok count={DEFAULT_CRIME_COUNT}");
        Ok(())
    }
}
