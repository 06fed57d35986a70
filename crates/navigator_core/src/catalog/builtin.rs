//! Built-in consulting scenario data set.
//!
//! Hand-authored reference data; the catalog tests hold these records to the
//! same invariants as externally loaded ones.

use crate::model::scenario::{SavingsValue, Scenario, PAYBACK_PERIOD_KEY};
use std::collections::BTreeMap;

fn record(
    title: &str,
    description: &str,
    recommendations: &[&str],
    savings: &[(&str, SavingsValue)],
) -> Scenario {
    Scenario {
        title: title.to_string(),
        description: description.to_string(),
        recommendations: recommendations.iter().map(|step| step.to_string()).collect(),
        estimated_savings: savings
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn percent(value: &str) -> SavingsValue {
    SavingsValue::Text(value.to_string())
}

fn years(value: f64) -> SavingsValue {
    SavingsValue::Number(value)
}

/// Returns the six built-in scenarios in authored order.
pub(crate) fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        record(
            "Energy Optimization",
            "A mid-sized manufacturing facility wants to reduce energy consumption \
             across its production lines and building operations.",
            &[
                "Install IoT-enabled smart meters on major production equipment",
                "Upgrade facility lighting to LED with occupancy sensors",
                "Optimize HVAC schedules around production shifts",
                "Deploy energy analytics dashboards for continuous monitoring",
            ],
            &[
                ("energy_cost", percent("18-25%")),
                ("carbon_emissions", percent("15-20%")),
                (PAYBACK_PERIOD_KEY, years(2.0)),
            ],
        ),
        record(
            "Water Usage Reduction",
            "A beverage processing company wants to cut fresh water intake and \
             wastewater discharge in its bottling operation.",
            &[
                "Install smart water meters at key process points",
                "Recycle rinse water through closed-loop treatment",
                "Repair leaks and replace worn nozzles flagged by monitoring",
                "Train operators on water-efficient cleaning procedures",
            ],
            &[
                ("water_consumption", percent("20-30%")),
                ("water_cost", percent("15-20%")),
                (PAYBACK_PERIOD_KEY, years(3.0)),
            ],
        ),
        record(
            "Supply Chain Emission Transparency",
            "A logistics provider needs visibility into emissions across its \
             carrier network and supply chain partners.",
            &[
                "Deploy carbon accounting software across tier-one suppliers",
                "Adopt blockchain-backed tracking for emission-relevant shipments",
                "Consolidate shipments and optimize routing",
                "Publish quarterly emission transparency reports",
            ],
            &[
                ("carbon_emissions", percent("10-15%")),
                ("logistics_cost", percent("8-12%")),
                (PAYBACK_PERIOD_KEY, years(4.0)),
            ],
        ),
        record(
            "Smart Building Retrofitting",
            "A municipal administration plans to retrofit its office building \
             stock with digital automation and on-site renewables.",
            &[
                "Install building automation for HVAC and lighting control",
                "Add insulation and smart window films to reduce heating load",
                "Integrate rooftop solar with battery storage",
                "Use digital twin models to simulate retrofit options",
            ],
            &[
                ("energy_cost", percent("25-35%")),
                ("carbon_emissions", percent("20-30%")),
                (PAYBACK_PERIOD_KEY, years(5.0)),
            ],
        ),
        record(
            "Waste Management Optimization",
            "A regional recycler wants to raise sorting purity and divert more \
             material away from landfill.",
            &[
                "Install AI-based machine vision sorting on conveyor lines",
                "Add fill-level sensors to collection containers",
                "Optimize collection routes with telematics data",
                "Market recovered fractions to circular-economy buyers",
            ],
            &[
                ("landfill_volume", percent("30-40%")),
                ("operating_cost", percent("12-18%")),
                (PAYBACK_PERIOD_KEY, years(3.0)),
            ],
        ),
        record(
            "Remote Energy Monitoring for SMEs",
            "A cluster of SMEs sharing an industrial park wants continuous \
             energy monitoring without dedicated on-site energy staff.",
            &[
                "Roll out plug-and-play smart meters across all units",
                "Provide a shared cloud dashboard with consumption alerting",
                "Benchmark usage across comparable units in the park",
                "Schedule quarterly efficiency reviews with an energy advisor",
            ],
            &[
                ("energy_cost", percent("10-15%")),
                (PAYBACK_PERIOD_KEY, years(1.5)),
            ],
        ),
    ]
}
