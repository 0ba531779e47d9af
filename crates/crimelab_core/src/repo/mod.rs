//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the crime data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic absence (`Ok(None)`) for point-lookup
//!   misses in addition to DB transport errors.

pub mod crime_repo;
