//! Canonical domain model for sustainability scenario data.
//!
//! # Responsibility
//! - Define the scenario record shape shared by catalog, store and services.
//! - Keep field-level validation rules next to the data they guard.
//!
//! # Invariants
//! - Serialized field names follow the external catalog schema
//!   (`scenario`, `description`, `recommendations`, `estimated_savings`).
//! - A record that passes `Scenario::validate()` always carries a positive
//!   `payback_period_years` savings entry.

pub mod scenario;
