//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep embedding applications decoupled from storage details.

pub mod crime_service;
