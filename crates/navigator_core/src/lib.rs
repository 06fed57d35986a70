//! Core domain logic for the sustainability scenario navigator.
//! This crate is the single source of truth for catalog invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::scenario::{
    SavingsValue, Scenario, ScenarioValidationError, PAYBACK_PERIOD_KEY,
};
pub use search::keyword::{search_catalog, SearchHit, SearchQuery};
pub use service::insight_service::{
    assess_complexity, classify_industry, determine_company_size, financial_analysis,
    implementation_timeline, risk_factors, success_indicators, sustainability_metrics,
    CompanySize, Complexity, FinancialAnalysis, Industry, InsightError, InsightService,
    ScenarioProfile, ScenarioSummary, SustainabilityMetric, Timeline,
};
pub use store::{
    from_json_str, load_catalog, save_catalog, to_json_string, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
