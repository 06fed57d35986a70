//! Ordered scenario catalog and its construction invariants.
//!
//! # Responsibility
//! - Own the immutable, ordered collection of scenario records.
//! - Enforce collection-level invariants on construction.
//! - Provide read-only accessors for title and slug lookup.
//!
//! # Invariants
//! - Every contained record passes `Scenario::validate()`.
//! - Titles and derived slugs are unique across the collection.
//! - Record order is the authored order; no API reorders or mutates it.

mod builtin;

use crate::model::scenario::{Scenario, ScenarioValidationError};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Collection-level error raised while building a catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A record failed its own validation; `index` is the record position.
    Validation {
        index: usize,
        source: ScenarioValidationError,
    },
    DuplicateTitle(String),
    DuplicateSlug(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { index, source } => {
                write!(f, "invalid scenario at index {index}: {source}")
            }
            Self::DuplicateTitle(title) => {
                write!(f, "duplicate scenario title: `{title}`")
            }
            Self::DuplicateSlug(slug) => {
                write!(f, "duplicate scenario slug: `{slug}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::DuplicateTitle(_) | Self::DuplicateSlug(_) => None,
        }
    }
}

/// Immutable, ordered collection of scenario records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<Scenario>,
}

impl Catalog {
    /// Builds a catalog, validating every record and collection invariants.
    ///
    /// # Errors
    /// - `Validation` for the first record failing `Scenario::validate()`.
    /// - `DuplicateTitle` / `DuplicateSlug` for identity collisions.
    pub fn new(records: Vec<Scenario>) -> CatalogResult<Self> {
        let mut titles = BTreeSet::new();
        let mut slugs = BTreeSet::new();

        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| CatalogError::Validation { index, source })?;

            if !titles.insert(record.title.clone()) {
                return Err(CatalogError::DuplicateTitle(record.title.clone()));
            }
            let slug = record.slug();
            if !slugs.insert(slug.clone()) {
                return Err(CatalogError::DuplicateSlug(slug));
            }
        }

        Ok(Self { records })
    }

    /// Returns the built-in consulting scenario data set.
    ///
    /// The records are authored in this crate and bypass `new()`; the
    /// catalog test suite asserts they satisfy every construction invariant.
    pub fn builtin() -> Self {
        Self {
            records: builtin::builtin_scenarios(),
        }
    }

    /// Returns all records in authored order.
    pub fn all(&self) -> &[Scenario] {
        &self.records
    }

    /// Returns the record count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by exact title match.
    ///
    /// No fuzzy matching and no case folding; `None` signals "not found".
    pub fn get_by_scenario(&self, name: &str) -> Option<&Scenario> {
        self.records.iter().find(|record| record.title == name)
    }

    /// Looks up a record by its derived slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Scenario> {
        self.records.iter().find(|record| record.slug() == slug)
    }

    /// Iterates records in authored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
