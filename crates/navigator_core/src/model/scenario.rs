//! Scenario domain model.
//!
//! # Responsibility
//! - Define the canonical consulting-scenario record and its savings map.
//! - Provide record-level validation and slug derivation.
//!
//! # Invariants
//! - `title` is the record's external identity; `slug()` is derived from it
//!   and never stored separately.
//! - `estimated_savings` is an open mapping; only `payback_period_years`
//!   is required and must be a positive finite number.
//! - Textual savings values are percentage ranges (`18-25%`) or single
//!   percentages (`30%`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Savings key that every valid record must carry.
pub const PAYBACK_PERIOD_KEY: &str = "payback_period_years";

static PERCENT_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(\.\d+)?(-\d+(\.\d+)?)?%$").expect("valid percent range regex")
});

/// One projected-savings value in the open `estimated_savings` mapping.
///
/// The external schema mixes numeric year counts with percentage strings in
/// the same object, so this stays an untagged enum rather than a fixed type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavingsValue {
    /// Numeric value, used by `payback_period_years`.
    Number(f64),
    /// Percentage range or single percentage, e.g. `"18-25%"`.
    Text(String),
}

impl SavingsValue {
    /// Returns the numeric value when this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the textual value when this is a percentage string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(value) => Some(value.as_str()),
        }
    }
}

impl Display for SavingsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) if value.fract() == 0.0 => write!(f, "{}", *value as i64),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Canonical record for one consulting scenario.
///
/// Recommendations keep their authored order; the order carries no priority
/// ranking, only presentation intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short unique title. Serialized as `scenario` to match the external
    /// catalog schema naming.
    #[serde(rename = "scenario")]
    pub title: String,
    /// Free-text business context.
    pub description: String,
    /// Actionable implementation steps in presentation order.
    pub recommendations: Vec<String>,
    /// Open metric-name to projected-improvement mapping.
    pub estimated_savings: BTreeMap<String, SavingsValue>,
}

impl Scenario {
    /// Returns the stable lowercase identifier derived from the title.
    ///
    /// Spaces and hyphens map to underscores, so
    /// `"Remote Energy Monitoring for SMEs"` becomes
    /// `remote_energy_monitoring_for_smes`.
    pub fn slug(&self) -> String {
        self.title
            .to_ascii_lowercase()
            .replace([' ', '-'], "_")
    }

    /// Returns the payback period in years when present and numeric.
    pub fn payback_years(&self) -> Option<f64> {
        self.estimated_savings
            .get(PAYBACK_PERIOD_KEY)
            .and_then(SavingsValue::as_number)
    }

    /// Validates record-level invariants.
    ///
    /// # Errors
    /// - Blank title, description or recommendation entries.
    /// - Empty recommendation list.
    /// - Missing, non-numeric or non-positive `payback_period_years`.
    /// - Textual savings values that are not `<low>-<high>%` or `<value>%`.
    pub fn validate(&self) -> Result<(), ScenarioValidationError> {
        if self.title.trim().is_empty() {
            return Err(ScenarioValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ScenarioValidationError::EmptyDescription {
                title: self.title.clone(),
            });
        }

        if self.recommendations.is_empty() {
            return Err(ScenarioValidationError::NoRecommendations {
                title: self.title.clone(),
            });
        }
        for (index, recommendation) in self.recommendations.iter().enumerate() {
            if recommendation.trim().is_empty() {
                return Err(ScenarioValidationError::EmptyRecommendation {
                    title: self.title.clone(),
                    index,
                });
            }
        }

        match self.estimated_savings.get(PAYBACK_PERIOD_KEY) {
            None => {
                return Err(ScenarioValidationError::MissingPaybackPeriod {
                    title: self.title.clone(),
                });
            }
            Some(SavingsValue::Text(value)) => {
                return Err(ScenarioValidationError::NonNumericPaybackPeriod {
                    title: self.title.clone(),
                    value: value.clone(),
                });
            }
            Some(SavingsValue::Number(years)) => {
                if !years.is_finite() || *years <= 0.0 {
                    return Err(ScenarioValidationError::NonPositivePaybackPeriod {
                        title: self.title.clone(),
                        value: *years,
                    });
                }
            }
        }

        for (key, value) in &self.estimated_savings {
            if key == PAYBACK_PERIOD_KEY {
                continue;
            }
            if let SavingsValue::Text(text) = value {
                if !PERCENT_RANGE_RE.is_match(text) {
                    return Err(ScenarioValidationError::InvalidSavingsValue {
                        title: self.title.clone(),
                        key: key.clone(),
                        value: text.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Validation error for a single scenario record.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioValidationError {
    EmptyTitle,
    EmptyDescription { title: String },
    NoRecommendations { title: String },
    EmptyRecommendation { title: String, index: usize },
    MissingPaybackPeriod { title: String },
    NonNumericPaybackPeriod { title: String, value: String },
    NonPositivePaybackPeriod { title: String, value: f64 },
    InvalidSavingsValue { title: String, key: String, value: String },
}

impl Display for ScenarioValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "scenario title must not be blank"),
            Self::EmptyDescription { title } => {
                write!(f, "scenario `{title}` has a blank description")
            }
            Self::NoRecommendations { title } => {
                write!(f, "scenario `{title}` must have at least one recommendation")
            }
            Self::EmptyRecommendation { title, index } => {
                write!(f, "scenario `{title}` has a blank recommendation at index {index}")
            }
            Self::MissingPaybackPeriod { title } => {
                write!(f, "scenario `{title}` is missing `{PAYBACK_PERIOD_KEY}`")
            }
            Self::NonNumericPaybackPeriod { title, value } => {
                write!(
                    f,
                    "scenario `{title}` has non-numeric `{PAYBACK_PERIOD_KEY}`: `{value}`"
                )
            }
            Self::NonPositivePaybackPeriod { title, value } => {
                write!(
                    f,
                    "scenario `{title}` has non-positive `{PAYBACK_PERIOD_KEY}`: {value}"
                )
            }
            Self::InvalidSavingsValue { title, key, value } => {
                write!(
                    f,
                    "scenario `{title}` savings `{key}` is not a percentage value: `{value}`"
                )
            }
        }
    }
}

impl Error for ScenarioValidationError {}
