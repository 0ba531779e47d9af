//! Bulk-import parsing for external crime data.
//!
//! # Responsibility
//! - Decode the fixed CSV exchange format into domain records.
//! - Classify per-line failures for the import boundary to log.

pub mod csv;
