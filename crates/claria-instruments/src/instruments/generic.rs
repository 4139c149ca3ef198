//! Generic configuration used when an instrument or subscale has no table.

use std::collections::BTreeMap;

use claria_core::models::{Category, CategoryRiskMap, RiskLevel};

use crate::scoring::{BandTable, InstrumentDefinition, ThresholdBand};

pub const GENERIC_RECOMMENDATIONS: [&str; 2] = [
    "Review scores with qualified clinician",
    "Follow standard clinical procedures",
];

/// Overall risk level reported for an unknown instrument with no scorable subscales.
pub const GENERIC_EMPTY_DEFAULT: RiskLevel = RiskLevel::Moderate;

/// ≤8 Low, ≤12 Low/Moderate, ≤15 Moderate, ≤20 Moderate/Severe, above 20 Severe.
pub fn generic_bands() -> &'static [ThresholdBand] {
    static BANDS: std::sync::LazyLock<Vec<ThresholdBand>> = std::sync::LazyLock::new(|| {
        BandTable::new(CategoryRiskMap::default())
            .up_to(8.0, Category::Low, "{subscale} is within normal limits", &["No action required"])
            .up_to(
                12.0,
                Category::LowModerate,
                "{subscale} is mildly elevated",
                &["Monitor at next visit"],
            )
            .up_to(
                15.0,
                Category::Moderate,
                "{subscale} is moderately elevated",
                &["Discuss results with a clinician"],
            )
            .up_to(
                20.0,
                Category::ModerateSevere,
                "{subscale} is significantly elevated",
                &["Clinical review recommended"],
            )
            .above(
                Category::Severe,
                "{subscale} is severely elevated",
                &["Prompt clinical review required"],
            )
    });
    &BANDS
}

/// Stand-in definition for an instrument id the catalog does not know.
///
/// Every subscale falls through to [`generic_bands`] and every risk level maps
/// to the same two generic recommendations.
pub fn generic_definition(instrument_id: &str) -> InstrumentDefinition {
    let recommendations: Vec<String> = GENERIC_RECOMMENDATIONS
        .iter()
        .map(|s| s.to_string())
        .collect();

    InstrumentDefinition {
        id: instrument_id.to_string(),
        display_name: instrument_id.to_string(),
        subscales: Vec::new(),
        recommendation_table: RiskLevel::ALL
            .into_iter()
            .map(|level| (level, recommendations.clone()))
            .collect::<BTreeMap<_, _>>(),
        category_risk_map: CategoryRiskMap::default(),
        total_subscale: None,
        empty_default: GENERIC_EMPTY_DEFAULT,
        safety_policy: None,
    }
}
