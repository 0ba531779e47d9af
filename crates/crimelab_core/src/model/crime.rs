//! Crime domain model.
//!
//! # Responsibility
//! - Define the canonical crime record persisted by the store.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another record.
//! - `date` is Unix epoch milliseconds.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every crime record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CrimeId = Uuid;

/// Canonical crime record.
///
/// Records are plain value objects: the store returns detached copies, and
/// mutations only become visible through an explicit update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crime {
    /// Stable global ID used for lookups and updates.
    pub uuid: CrimeId,
    /// Free-form case title.
    pub title: String,
    /// When the crime occurred, in Unix epoch milliseconds.
    pub date: i64,
    /// Whether the case has been closed.
    pub solved: bool,
}

impl Crime {
    /// Creates a new unsolved crime with a generated stable ID, dated now.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            title,
            Utc::now().timestamp_millis(),
            false,
        )
    }

    /// Creates a crime with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Invariants
    /// - The provided `uuid` must remain stable for this record's lifetime.
    pub fn with_id(uuid: CrimeId, title: impl Into<String>, date: i64, solved: bool) -> Self {
        Self {
            uuid,
            title: title.into(),
            date,
            solved,
        }
    }
}
