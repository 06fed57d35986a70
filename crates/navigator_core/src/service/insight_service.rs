//! Scenario insight derivation service.
//!
//! # Responsibility
//! - Classify records by industry, company size and complexity.
//! - Derive payback-tiered financial analysis and implementation timelines.
//! - Aggregate per-scenario profiles and catalog-wide summaries.
//!
//! # Invariants
//! - All derivations are pure functions of the record; the catalog is never
//!   mutated.
//! - Classification tables are matched in declaration order; the first
//!   matching entry wins.
//! - A missing payback value falls back to 3 years in tier selection.

use crate::catalog::Catalog;
use crate::model::scenario::{SavingsValue, Scenario, PAYBACK_PERIOD_KEY};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_PAYBACK_YEARS: f64 = 3.0;
const MAX_RISK_FACTORS: usize = 5;
const MAX_SUCCESS_INDICATORS: usize = 8;
const SUMMARY_DESCRIPTION_CHARS: usize = 150;
const SUMMARY_KEY_BENEFITS: usize = 3;

/// Industry segment derived from the scenario description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Industry {
    #[serde(rename = "Manufacturing")]
    Manufacturing,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
    #[serde(rename = "Logistics & Transportation")]
    Logistics,
    #[serde(rename = "Government & Public Sector")]
    PublicSector,
    #[serde(rename = "Waste Management")]
    WasteManagement,
    #[serde(rename = "Retail")]
    Retail,
    #[serde(rename = "Energy & Utilities")]
    EnergyAndUtilities,
    #[serde(rename = "General Industry")]
    General,
}

impl Industry {
    pub fn label(self) -> &'static str {
        match self {
            Self::Manufacturing => "Manufacturing",
            Self::FoodAndBeverage => "Food & Beverage",
            Self::Logistics => "Logistics & Transportation",
            Self::PublicSector => "Government & Public Sector",
            Self::WasteManagement => "Waste Management",
            Self::Retail => "Retail",
            Self::EnergyAndUtilities => "Energy & Utilities",
            Self::General => "General Industry",
        }
    }
}

impl Display for Industry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Company size bracket derived from the scenario description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompanySize {
    #[serde(rename = "Small (10-50 employees)")]
    Small,
    #[serde(rename = "Medium (50-500 employees)")]
    Medium,
    #[serde(rename = "Government/Public Sector")]
    PublicSector,
    #[serde(rename = "Small to Medium (10-500 employees)")]
    SmallToMedium,
}

impl CompanySize {
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small (10-50 employees)",
            Self::Medium => "Medium (50-500 employees)",
            Self::PublicSector => "Government/Public Sector",
            Self::SmallToMedium => "Small to Medium (10-500 employees)",
        }
    }
}

impl Display for CompanySize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Implementation complexity derived from recommendation keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Complexity {
    #[serde(rename = "Low to Medium")]
    LowToMedium,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
}

impl Complexity {
    pub fn label(self) -> &'static str {
        match self {
            Self::LowToMedium => "Low to Medium",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Manufacturing,
        &["manufacturing", "facility", "production", "factory", "plant"],
    ),
    (
        Industry::FoodAndBeverage,
        &["beverage", "food", "restaurant", "kitchen", "processing"],
    ),
    (
        Industry::Logistics,
        &["logistics", "fleet", "transport", "shipping", "supply chain"],
    ),
    (
        Industry::PublicSector,
        &["municipal", "government", "public", "city", "office building"],
    ),
    (
        Industry::WasteManagement,
        &["recycler", "waste", "sorting", "recycling", "circular"],
    ),
    (
        Industry::Retail,
        &["retail", "smes", "small business", "store", "commercial"],
    ),
    (
        Industry::EnergyAndUtilities,
        &["energy", "grid", "utilities", "power", "renewable"],
    ),
];

const HIGH_COMPLEXITY_INDICATORS: &[&str] =
    &["digital twin", "blockchain", "machine vision", "ai-based"];
const MEDIUM_COMPLEXITY_INDICATORS: &[&str] =
    &["iot", "smart", "analytics", "automation", "predictive"];

/// Payback-tiered financial view of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialAnalysis {
    pub investment_range: String,
    pub annual_savings: String,
    pub payback_period: String,
    pub internal_rate_of_return: String,
    pub risk_level: String,
    pub financing_options: Vec<String>,
    pub tax_incentives: Vec<String>,
}

/// Payback-tiered implementation phase durations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub planning_phase: String,
    pub procurement: String,
    pub installation: String,
    pub testing: String,
    pub optimization: String,
    pub total_duration: String,
}

/// One reportable sustainability metric extracted from the savings map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SustainabilityMetric {
    pub metric: String,
    pub improvement: SavingsValue,
    pub category: &'static str,
    pub measurement_type: &'static str,
    pub reporting_standard: &'static str,
    pub monitoring_frequency: &'static str,
}

/// Full derived view of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioProfile {
    pub id: String,
    pub title: String,
    pub description: String,
    pub industry: Industry,
    pub company_size: CompanySize,
    pub complexity: Complexity,
    pub implementation_steps: Vec<String>,
    pub estimated_savings: BTreeMap<String, SavingsValue>,
    pub financial_analysis: FinancialAnalysis,
    pub timeline: Timeline,
    pub sustainability_metrics: Vec<SustainabilityMetric>,
    pub risk_factors: Vec<String>,
    pub success_indicators: Vec<String>,
}

/// Compact catalog listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub industry: Industry,
    pub company_size: CompanySize,
    pub complexity: Complexity,
    pub payback_period: String,
    pub key_benefits: Vec<String>,
}

/// Service error for insight derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightError {
    ScenarioNotFound(String),
}

impl Display for InsightError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScenarioNotFound(slug) => write!(f, "scenario not found: `{slug}`"),
        }
    }
}

impl Error for InsightError {}

/// Classifies the scenario industry from description keywords.
pub fn classify_industry(record: &Scenario) -> Industry {
    let description = record.description.to_lowercase();
    for (industry, keywords) in INDUSTRY_KEYWORDS {
        if keywords.iter().any(|keyword| description.contains(keyword)) {
            return *industry;
        }
    }
    Industry::General
}

/// Determines the company size bracket from description keywords.
pub fn determine_company_size(record: &Scenario) -> CompanySize {
    let description = record.description.to_lowercase();
    if description.contains("mid-sized") {
        CompanySize::Medium
    } else if description.contains("sme") || description.contains("cluster") {
        CompanySize::Small
    } else if description.contains("municipal") {
        CompanySize::PublicSector
    } else {
        CompanySize::SmallToMedium
    }
}

/// Scores implementation complexity from recommendation keywords.
///
/// High indicators weigh 2, medium indicators weigh 1; a total of 4 or more
/// is `High`, 2 or more is `Medium`, anything below stays `LowToMedium`.
pub fn assess_complexity(record: &Scenario) -> Complexity {
    let steps = record.recommendations.join(" ").to_lowercase();

    let high_score = HIGH_COMPLEXITY_INDICATORS
        .iter()
        .filter(|indicator| steps.contains(*indicator))
        .count()
        * 2;
    let medium_score = MEDIUM_COMPLEXITY_INDICATORS
        .iter()
        .filter(|indicator| steps.contains(*indicator))
        .count();

    match high_score + medium_score {
        score if score >= 4 => Complexity::High,
        score if score >= 2 => Complexity::Medium,
        _ => Complexity::LowToMedium,
    }
}

/// Builds the payback-tiered financial view.
pub fn financial_analysis(record: &Scenario) -> FinancialAnalysis {
    let payback = payback_or_default(record);

    let (investment_range, annual_savings, risk_level, irr) = if payback <= 2.0 {
        ("$25,000 - $150,000", "$20,000 - $75,000", "Low", "40-55%")
    } else if payback <= 3.0 {
        (
            "$50,000 - $300,000",
            "$25,000 - $100,000",
            "Low to Medium",
            "25-40%",
        )
    } else {
        (
            "$100,000 - $500,000",
            "$30,000 - $125,000",
            "Medium",
            "15-30%",
        )
    };

    FinancialAnalysis {
        investment_range: investment_range.to_string(),
        annual_savings: annual_savings.to_string(),
        payback_period: format!("{} years", format_years(payback)),
        internal_rate_of_return: irr.to_string(),
        risk_level: risk_level.to_string(),
        financing_options: vec![
            "Vendor financing programs".to_string(),
            "Green bonds".to_string(),
            "Equipment leasing".to_string(),
        ],
        tax_incentives: vec![
            "Federal tax credits".to_string(),
            "Local rebates".to_string(),
            "Depreciation benefits".to_string(),
        ],
    }
}

/// Builds the payback-tiered implementation timeline.
pub fn implementation_timeline(record: &Scenario) -> Timeline {
    let payback = payback_or_default(record);

    let (planning, procurement, installation, testing, optimization, total) = if payback <= 2.0 {
        ("3-4 weeks", "2-3 weeks", "4-8 weeks", "1-2 weeks", "2-4 weeks", "3-5 months")
    } else if payback <= 3.0 {
        ("4-6 weeks", "4-6 weeks", "6-12 weeks", "2-4 weeks", "4-6 weeks", "5-8 months")
    } else {
        ("6-10 weeks", "8-12 weeks", "12-20 weeks", "4-6 weeks", "6-10 weeks", "8-12 months")
    };

    Timeline {
        planning_phase: planning.to_string(),
        procurement: procurement.to_string(),
        installation: installation.to_string(),
        testing: testing.to_string(),
        optimization: optimization.to_string(),
        total_duration: total.to_string(),
    }
}

/// Extracts one reportable metric per savings entry besides the payback key.
pub fn sustainability_metrics(record: &Scenario) -> Vec<SustainabilityMetric> {
    record
        .estimated_savings
        .iter()
        .filter(|(key, _)| key.as_str() != PAYBACK_PERIOD_KEY)
        .map(|(key, value)| SustainabilityMetric {
            metric: title_case(key),
            improvement: value.clone(),
            category: "Environmental Impact",
            measurement_type: "Percentage Improvement",
            reporting_standard: "ISO 14001",
            monitoring_frequency: "Monthly",
        })
        .collect()
}

/// Collects implementation risk factors, capped at five entries.
pub fn risk_factors(record: &Scenario) -> Vec<String> {
    let mut risks = Vec::new();

    if payback_or_default(record) > 3.0 {
        risks.push("Extended payback period increases financial risk".to_string());
    }
    if record.description.to_lowercase().contains("manufacturing") {
        risks.push("Production downtime during implementation".to_string());
    }
    risks.push("Technology standards evolution may impact compatibility".to_string());
    risks.push("Integration complexity with existing systems".to_string());

    risks.truncate(MAX_RISK_FACTORS);
    risks
}

/// Collects success indicators, capped at eight entries.
pub fn success_indicators(record: &Scenario) -> Vec<String> {
    let payback = payback_or_default(record);
    let mut indicators = vec![format!(
        "Achieve positive ROI within {} years",
        format_years(payback)
    )];

    for (key, value) in &record.estimated_savings {
        if key == PAYBACK_PERIOD_KEY {
            continue;
        }
        indicators.push(format!("{}: achieve {} improvement", title_case(key), value));
    }

    indicators.push("Project completion within budget and timeline".to_string());
    indicators.push("System uptime above 99% after stabilization".to_string());
    indicators.push("Staff training completion rate above 95%".to_string());

    indicators.truncate(MAX_SUCCESS_INDICATORS);
    indicators
}

/// Insight derivation service over a validated catalog.
pub struct InsightService {
    catalog: Catalog,
}

impl InsightService {
    /// Creates a service over the provided catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Builds the full derived profile for one scenario by slug.
    ///
    /// # Errors
    /// - `ScenarioNotFound` when no record matches the slug.
    pub fn scenario_profile(&self, slug: &str) -> Result<ScenarioProfile, InsightError> {
        let record = self
            .catalog
            .get_by_slug(slug)
            .ok_or_else(|| InsightError::ScenarioNotFound(slug.to_string()))?;

        Ok(ScenarioProfile {
            id: record.slug(),
            title: record.title.clone(),
            description: record.description.clone(),
            industry: classify_industry(record),
            company_size: determine_company_size(record),
            complexity: assess_complexity(record),
            implementation_steps: record.recommendations.clone(),
            estimated_savings: record.estimated_savings.clone(),
            financial_analysis: financial_analysis(record),
            timeline: implementation_timeline(record),
            sustainability_metrics: sustainability_metrics(record),
            risk_factors: risk_factors(record),
            success_indicators: success_indicators(record),
        })
    }

    /// Builds compact summaries for every catalog record, in catalog order.
    pub fn catalog_summaries(&self) -> Vec<ScenarioSummary> {
        self.catalog
            .iter()
            .map(|record| ScenarioSummary {
                id: record.slug(),
                title: record.title.clone(),
                description: truncate_chars(&record.description, SUMMARY_DESCRIPTION_CHARS),
                industry: classify_industry(record),
                company_size: determine_company_size(record),
                complexity: assess_complexity(record),
                payback_period: format!("{} years", format_years(payback_or_default(record))),
                key_benefits: record
                    .estimated_savings
                    .keys()
                    .filter(|key| key.as_str() != PAYBACK_PERIOD_KEY)
                    .take(SUMMARY_KEY_BENEFITS)
                    .map(|key| title_case(key))
                    .collect(),
            })
            .collect()
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated = value.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}

fn payback_or_default(record: &Scenario) -> f64 {
    record.payback_years().unwrap_or(DEFAULT_PAYBACK_YEARS)
}

fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{}", years as i64)
    } else {
        format!("{years}")
    }
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
