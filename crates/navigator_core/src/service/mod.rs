//! Core use-case services.
//!
//! # Responsibility
//! - Derive analysis views from validated catalog records.
//! - Keep CLI and embedding layers decoupled from derivation rules.

pub mod insight_service;
