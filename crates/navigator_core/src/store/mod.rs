//! Catalog persistence as a JSON document.
//!
//! # Responsibility
//! - Encode and parse the catalog in its external JSON shape.
//! - Load and save catalog files with structured diagnostics.
//!
//! # Invariants
//! - The wire shape is an array of records with the external field names
//!   (`scenario`, `description`, `recommendations`, `estimated_savings`).
//! - Parsed data is fully re-validated before a catalog is returned;
//!   invalid persisted state is rejected instead of masked.
//! - Encode then parse round-trips to an equal catalog.

use crate::catalog::{Catalog, CatalogError};
use crate::model::scenario::Scenario;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for catalog encoding, parsing and file I/O.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Catalog(CatalogError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "catalog file I/O failed for `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "catalog JSON is malformed: {err}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<CatalogError> for StoreError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Encodes the catalog as a pretty-printed JSON array of records.
pub fn to_json_string(catalog: &Catalog) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(catalog.all())?)
}

/// Parses a JSON array of records into a validated catalog.
///
/// # Errors
/// - `Json` for syntactically invalid input.
/// - `Catalog` when any parsed record violates catalog invariants.
pub fn from_json_str(json: &str) -> StoreResult<Catalog> {
    let records: Vec<Scenario> = serde_json::from_str(json)?;
    Ok(Catalog::new(records)?)
}

/// Loads and validates a catalog file.
///
/// # Side effects
/// - Emits `catalog_load` logging events with duration and status.
pub fn load_catalog(path: impl AsRef<Path>) -> StoreResult<Catalog> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=catalog_load module=store status=start path={}",
        path.display()
    );

    let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    });

    let catalog = json.and_then(|json| from_json_str(&json));
    match catalog {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=store status=ok path={} records={} duration_ms={}",
                path.display(),
                catalog.len(),
                started_at.elapsed().as_millis()
            );
            Ok(catalog)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=store status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Saves the catalog to a JSON file.
///
/// # Side effects
/// - Emits `catalog_save` logging events with duration and status.
pub fn save_catalog(path: impl AsRef<Path>, catalog: &Catalog) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=catalog_save module=store status=start path={} records={}",
        path.display(),
        catalog.len()
    );

    let result = to_json_string(catalog).and_then(|json| {
        std::fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    });

    match result {
        Ok(()) => {
            info!(
                "event=catalog_save module=store status=ok path={} duration_ms={}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=catalog_save module=store status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
