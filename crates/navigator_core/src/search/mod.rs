//! Catalog search entry points.
//!
//! # Responsibility
//! - Expose keyword query APIs over validated catalogs.
//! - Keep search result shaping inside core.

pub mod keyword;
