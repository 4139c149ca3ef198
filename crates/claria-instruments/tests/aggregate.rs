use std::collections::BTreeMap;

use claria_core::models::{Category, RiskLevel, SubscaleInterpretation};
use claria_instruments::ThresholdCatalog;
use claria_instruments::aggregate::aggregate;
use claria_instruments::instruments::bdi2::{SUICIDE_IDEATION, SUICIDE_OVERRIDE, TOTAL};
use claria_instruments::instruments::generic::generic_definition;
use claria_instruments::scoring::InstrumentDefinition;

fn builtin(id: &str) -> &'static InstrumentDefinition {
    ThresholdCatalog::builtin().instrument(id).unwrap()
}

fn interpretation(category: Category, risk_level: RiskLevel) -> SubscaleInterpretation {
    SubscaleInterpretation {
        category,
        description: String::new(),
        actions: Vec::new(),
        risk_level,
    }
}

#[test]
fn empty_input_uses_instrument_default() {
    let empty = BTreeMap::new();
    for (id, expected) in [
        ("basc3", RiskLevel::Low),
        ("pcl5", RiskLevel::Low),
        ("ctq", RiskLevel::Low),
        ("bdi2", RiskLevel::Low),
    ] {
        let aggregation = aggregate(builtin(id), &empty);
        assert_eq!(aggregation.overall_risk_level, expected, "{id}");
        assert!(aggregation.override_recommendation.is_none());
    }
}

#[test]
fn empty_input_for_unknown_instrument_is_moderate() {
    let aggregation = aggregate(&generic_definition("unlisted"), &BTreeMap::new());
    assert_eq!(aggregation.overall_risk_level, RiskLevel::Moderate);
}

#[test]
fn overall_is_maximum_subscale_level() {
    let per_subscale = BTreeMap::from([
        ("Anxiety".to_string(), interpretation(Category::Low, RiskLevel::Low)),
        (
            "Depression".to_string(),
            interpretation(Category::ModerateSevere, RiskLevel::High),
        ),
        (
            "Withdrawal".to_string(),
            interpretation(Category::Moderate, RiskLevel::Moderate),
        ),
    ]);
    let aggregation = aggregate(builtin("basc3"), &per_subscale);
    assert_eq!(aggregation.overall_risk_level, RiskLevel::High);
    assert!(aggregation.override_recommendation.is_none());
}

#[test]
fn critical_subscale_at_trigger_forces_override() {
    let per_subscale = BTreeMap::from([
        (TOTAL.to_string(), interpretation(Category::Low, RiskLevel::Low)),
        (
            SUICIDE_IDEATION.to_string(),
            interpretation(Category::ModerateSevere, RiskLevel::High),
        ),
    ]);
    let aggregation = aggregate(builtin("bdi2"), &per_subscale);
    assert_eq!(aggregation.overall_risk_level, RiskLevel::High);
    assert_eq!(
        aggregation.override_recommendation.as_deref(),
        Some(SUICIDE_OVERRIDE)
    );
}

#[test]
fn override_keeps_higher_level_from_other_subscales() {
    let per_subscale = BTreeMap::from([
        (TOTAL.to_string(), interpretation(Category::Severe, RiskLevel::VeryHigh)),
        (
            SUICIDE_IDEATION.to_string(),
            interpretation(Category::ModerateSevere, RiskLevel::High),
        ),
    ]);
    let aggregation = aggregate(builtin("bdi2"), &per_subscale);
    assert_eq!(aggregation.overall_risk_level, RiskLevel::VeryHigh);
    assert!(aggregation.override_recommendation.is_some());
}

#[test]
fn critical_subscale_below_trigger_has_no_override() {
    let per_subscale = BTreeMap::from([(
        SUICIDE_IDEATION.to_string(),
        interpretation(Category::Low, RiskLevel::Low),
    )]);
    let aggregation = aggregate(builtin("bdi2"), &per_subscale);
    assert_eq!(aggregation.overall_risk_level, RiskLevel::Low);
    assert!(aggregation.override_recommendation.is_none());
}

#[test]
fn policy_minimum_raises_overall_above_subscale_level() {
    let mut definition = builtin("bdi2").clone();
    if let Some(policy) = definition.safety_policy.as_mut() {
        policy.minimum_overall = RiskLevel::VeryHigh;
    }
    let per_subscale = BTreeMap::from([(
        SUICIDE_IDEATION.to_string(),
        interpretation(Category::ModerateSevere, RiskLevel::High),
    )]);
    let aggregation = aggregate(&definition, &per_subscale);
    assert_eq!(aggregation.overall_risk_level, RiskLevel::VeryHigh);
}

#[test]
fn elevated_non_critical_subscale_has_no_override() {
    let per_subscale = BTreeMap::from([(
        TOTAL.to_string(),
        interpretation(Category::Severe, RiskLevel::VeryHigh),
    )]);
    let aggregation = aggregate(builtin("bdi2"), &per_subscale);
    assert_eq!(aggregation.overall_risk_level, RiskLevel::VeryHigh);
    assert!(aggregation.override_recommendation.is_none());
}
