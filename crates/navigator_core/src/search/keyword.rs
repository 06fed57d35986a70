//! Keyword search over catalog records.
//!
//! # Responsibility
//! - Match query terms against title, description and recommendations.
//! - Return typed hits with stable slugs.
//!
//! # Invariants
//! - Matching is case-insensitive substring matching; no fuzzy logic.
//! - Result ordering is deterministic: ascending payback period, then
//!   catalog order.
//! - Blank queries and a zero limit return no hits.

use crate::catalog::Catalog;
use crate::model::scenario::Scenario;

/// Search options for keyword queries.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// User query text; split on whitespace into terms.
    pub text: String,
    /// Maximum number of hits to return.
    pub limit: u32,
}

impl SearchQuery {
    /// Creates a query with the default result limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: 20,
        }
    }
}

/// Single search hit returned by [`search_catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Stable scenario identifier.
    pub slug: String,
    /// Scenario title.
    pub title: String,
    /// Payback period used for result ordering.
    pub payback_years: f64,
    /// Query terms that matched this record.
    pub matched_terms: Vec<String>,
}

/// Searches the catalog and returns payback-ordered hits.
///
/// A record matches when any query term occurs in its title, description
/// or recommendations. Shorter payback periods rank first.
pub fn search_catalog(catalog: &Catalog, query: &SearchQuery) -> Vec<SearchHit> {
    let terms = query
        .text
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();

    if terms.is_empty() || query.limit == 0 {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for record in catalog {
        let haystack = searchable_text(record);
        let matched_terms = terms
            .iter()
            .filter(|term| haystack.contains(term.as_str()))
            .cloned()
            .collect::<Vec<_>>();

        if !matched_terms.is_empty() {
            hits.push(SearchHit {
                slug: record.slug(),
                title: record.title.clone(),
                payback_years: record.payback_years().unwrap_or(f64::INFINITY),
                matched_terms,
            });
        }
    }

    // Stable sort keeps catalog order for equal payback periods.
    hits.sort_by(|a, b| a.payback_years.total_cmp(&b.payback_years));
    hits.truncate(query.limit as usize);
    hits
}

fn searchable_text(record: &Scenario) -> String {
    let mut text = String::new();
    text.push_str(&record.title);
    text.push(' ');
    text.push_str(&record.description);
    for recommendation in &record.recommendations {
        text.push(' ');
        text.push_str(recommendation);
    }
    text.to_lowercase()
}
