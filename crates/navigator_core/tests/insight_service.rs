use navigator_core::{
    assess_complexity, classify_industry, determine_company_size, financial_analysis,
    implementation_timeline, risk_factors, success_indicators, sustainability_metrics, Catalog,
    CompanySize, Complexity, Industry, InsightError, InsightService, SavingsValue, Scenario,
    PAYBACK_PERIOD_KEY,
};
use std::collections::BTreeMap;

fn builtin_record(slug: &str) -> Scenario {
    Catalog::builtin()
        .get_by_slug(slug)
        .unwrap_or_else(|| panic!("builtin scenario `{slug}` should exist"))
        .clone()
}

fn custom_record(description: &str, payback: f64) -> Scenario {
    let mut savings = BTreeMap::new();
    savings.insert(
        PAYBACK_PERIOD_KEY.to_string(),
        SavingsValue::Number(payback),
    );
    Scenario {
        title: "Custom".to_string(),
        description: description.to_string(),
        recommendations: vec!["Review operations".to_string()],
        estimated_savings: savings,
    }
}

#[test]
fn classifies_builtin_records_into_expected_industries() {
    let expectations = [
        ("energy_optimization", Industry::Manufacturing),
        ("water_usage_reduction", Industry::FoodAndBeverage),
        ("supply_chain_emission_transparency", Industry::Logistics),
        ("smart_building_retrofitting", Industry::PublicSector),
        ("waste_management_optimization", Industry::WasteManagement),
        ("remote_energy_monitoring_for_smes", Industry::Retail),
    ];

    for (slug, expected) in expectations {
        let record = builtin_record(slug);
        assert_eq!(classify_industry(&record), expected, "slug `{slug}`");
    }
}

#[test]
fn unmatched_descriptions_fall_back_to_general_industry() {
    let record = custom_record("An accountancy practice wants tidier bookkeeping.", 2.0);
    assert_eq!(classify_industry(&record), Industry::General);
}

#[test]
fn determines_company_size_from_description() {
    assert_eq!(
        determine_company_size(&builtin_record("energy_optimization")),
        CompanySize::Medium
    );
    assert_eq!(
        determine_company_size(&builtin_record("smart_building_retrofitting")),
        CompanySize::PublicSector
    );
    assert_eq!(
        determine_company_size(&builtin_record("remote_energy_monitoring_for_smes")),
        CompanySize::Small
    );
    assert_eq!(
        determine_company_size(&builtin_record("waste_management_optimization")),
        CompanySize::SmallToMedium
    );
}

#[test]
fn complexity_scoring_reflects_recommendation_keywords() {
    // Digital twin plus automation and smart keywords score at least 4.
    assert_eq!(
        assess_complexity(&builtin_record("smart_building_retrofitting")),
        Complexity::High
    );
    assert_eq!(
        assess_complexity(&builtin_record("waste_management_optimization")),
        Complexity::High
    );
    // IoT, smart and analytics without high indicators stay Medium.
    assert_eq!(
        assess_complexity(&builtin_record("energy_optimization")),
        Complexity::Medium
    );
    assert_eq!(
        assess_complexity(&builtin_record("water_usage_reduction")),
        Complexity::LowToMedium
    );
}

#[test]
fn financial_analysis_tiers_switch_on_payback() {
    let quick = financial_analysis(&builtin_record("energy_optimization"));
    assert_eq!(quick.investment_range, "$25,000 - $150,000");
    assert_eq!(quick.risk_level, "Low");
    assert_eq!(quick.internal_rate_of_return, "40-55%");
    assert_eq!(quick.payback_period, "2 years");

    let medium = financial_analysis(&builtin_record("water_usage_reduction"));
    assert_eq!(medium.investment_range, "$50,000 - $300,000");
    assert_eq!(medium.risk_level, "Low to Medium");
    assert_eq!(medium.payback_period, "3 years");

    let slow = financial_analysis(&builtin_record("smart_building_retrofitting"));
    assert_eq!(slow.investment_range, "$100,000 - $500,000");
    assert_eq!(slow.risk_level, "Medium");
    assert_eq!(slow.internal_rate_of_return, "15-30%");

    assert_eq!(quick.financing_options.len(), 3);
    assert_eq!(quick.tax_incentives.len(), 3);
}

#[test]
fn timeline_tiers_switch_on_payback() {
    let quick = implementation_timeline(&builtin_record("remote_energy_monitoring_for_smes"));
    assert_eq!(quick.total_duration, "3-5 months");
    assert_eq!(quick.planning_phase, "3-4 weeks");

    let medium = implementation_timeline(&builtin_record("water_usage_reduction"));
    assert_eq!(medium.total_duration, "5-8 months");

    let slow = implementation_timeline(&builtin_record("supply_chain_emission_transparency"));
    assert_eq!(slow.total_duration, "8-12 months");
    assert_eq!(slow.installation, "12-20 weeks");
}

#[test]
fn sustainability_metrics_exclude_payback_and_title_case_names() {
    let metrics = sustainability_metrics(&builtin_record("energy_optimization"));

    let names = metrics
        .iter()
        .map(|metric| metric.metric.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Carbon Emissions", "Energy Cost"]);

    for metric in &metrics {
        assert_eq!(metric.category, "Environmental Impact");
        assert_eq!(metric.reporting_standard, "ISO 14001");
        assert_eq!(metric.monitoring_frequency, "Monthly");
    }
}

#[test]
fn risk_factors_reflect_payback_and_industry_conditions() {
    let slow = risk_factors(&builtin_record("smart_building_retrofitting"));
    assert!(slow
        .iter()
        .any(|risk| risk.contains("Extended payback period")));

    let manufacturing = risk_factors(&builtin_record("energy_optimization"));
    assert!(manufacturing
        .iter()
        .any(|risk| risk.contains("Production downtime")));

    let quick = risk_factors(&builtin_record("remote_energy_monitoring_for_smes"));
    assert!(!quick
        .iter()
        .any(|risk| risk.contains("Extended payback period")));
    assert!(quick.len() <= 5);
}

#[test]
fn success_indicators_lead_with_roi_and_cover_metrics() {
    let indicators = success_indicators(&builtin_record("energy_optimization"));
    assert_eq!(indicators[0], "Achieve positive ROI within 2 years");
    assert!(indicators
        .iter()
        .any(|indicator| indicator == "Energy Cost: achieve 18-25% improvement"));
    assert!(indicators.len() <= 8);

    let fractional = success_indicators(&builtin_record("remote_energy_monitoring_for_smes"));
    assert_eq!(fractional[0], "Achieve positive ROI within 1.5 years");
}

#[test]
fn scenario_profile_aggregates_all_derivations() {
    let service = InsightService::new(Catalog::builtin());
    let profile = service.scenario_profile("water_usage_reduction").unwrap();

    assert_eq!(profile.id, "water_usage_reduction");
    assert_eq!(profile.title, "Water Usage Reduction");
    assert_eq!(profile.industry, Industry::FoodAndBeverage);
    assert_eq!(profile.complexity, Complexity::LowToMedium);
    assert_eq!(profile.implementation_steps.len(), 4);
    assert!(profile.estimated_savings.contains_key(PAYBACK_PERIOD_KEY));
    assert_eq!(profile.financial_analysis.payback_period, "3 years");
    assert_eq!(profile.timeline.total_duration, "5-8 months");
    assert!(!profile.sustainability_metrics.is_empty());
    assert!(!profile.risk_factors.is_empty());
    assert!(!profile.success_indicators.is_empty());
}

#[test]
fn scenario_profile_rejects_unknown_slug() {
    let service = InsightService::new(Catalog::builtin());
    let err = service.scenario_profile("nonexistent_scenario").unwrap_err();
    assert_eq!(
        err,
        InsightError::ScenarioNotFound("nonexistent_scenario".to_string())
    );
}

#[test]
fn catalog_summaries_cover_every_record_in_order() {
    let service = InsightService::new(Catalog::builtin());
    let summaries = service.catalog_summaries();

    assert_eq!(summaries.len(), 6);
    assert_eq!(summaries[0].id, "energy_optimization");
    assert_eq!(summaries[1].payback_period, "3 years");

    for summary in &summaries {
        assert!(summary.key_benefits.len() <= 3);
        assert!(!summary
            .key_benefits
            .iter()
            .any(|benefit| benefit == "Payback Period Years"));
    }
}

#[test]
fn summary_descriptions_are_truncated_beyond_150_chars() {
    let long_description = "energy ".repeat(40);
    let record = custom_record(long_description.trim(), 2.0);
    let catalog = Catalog::new(vec![record]).unwrap();
    let service = InsightService::new(catalog);

    let summaries = service.catalog_summaries();
    assert!(summaries[0].description.ends_with("..."));
    assert_eq!(summaries[0].description.chars().count(), 153);

    let short = InsightService::new(Catalog::builtin());
    assert!(!short.catalog_summaries()[0].description.ends_with("..."));
}
