use claria_core::models::{Category, CategoryRiskMap, RiskLevel};

use crate::Instrument;
use crate::scoring::{
    BandTable, InstrumentDefinition, SafetyPolicy, ThresholdBand, critical_subscale,
    recommendation_table, subscale,
};

pub const TOTAL: &str = "Total Score";
pub const SUICIDE_IDEATION: &str = "Suicide Ideation";

pub const SUICIDE_OVERRIDE: &str =
    "URGENT: Conduct an immediate suicide risk assessment before the client leaves";

/// BDI-II: Beck Depression Inventory, Second Edition.
/// 21 items rated 0–3, total 0–63. Item 9 (suicidal thoughts or wishes) is
/// scored separately; a rating of 2 or more always triggers the safety override.
pub struct Bdi2;

impl Instrument for Bdi2 {
    fn definition(&self) -> &InstrumentDefinition {
        static DEFINITION: std::sync::LazyLock<InstrumentDefinition> =
            std::sync::LazyLock::new(|| {
                let risk_map = CategoryRiskMap::default();

                InstrumentDefinition {
                    id: "bdi2".to_string(),
                    display_name: "BDI-II".to_string(),
                    subscales: vec![
                        subscale(TOTAL, total_bands(risk_map)),
                        critical_subscale(SUICIDE_IDEATION, suicide_bands(risk_map)),
                    ],
                    recommendation_table: recommendation_table([
                        (
                            RiskLevel::Low,
                            &[
                                "Continue routine mood monitoring",
                                "Re-administer at the next scheduled review",
                            ],
                        ),
                        (
                            RiskLevel::Moderate,
                            &[
                                "Consider individual psychotherapy for depressive symptoms",
                                "Encourage behavioral activation and sleep hygiene",
                                "Re-administer BDI-II in 2 to 4 weeks",
                            ],
                        ),
                        (
                            RiskLevel::High,
                            &[
                                "Refer for evidence-based psychotherapy (CBT or IPT)",
                                "Evaluate need for antidepressant medication",
                                "Develop a safety plan with the client",
                            ],
                        ),
                        (
                            RiskLevel::VeryHigh,
                            &[
                                "Refer for urgent psychiatric evaluation",
                                "Develop a safety plan and means-restriction counseling",
                                "Increase session frequency",
                                "Involve support persons with the client's consent",
                            ],
                        ),
                    ]),
                    category_risk_map: risk_map,
                    total_subscale: Some(TOTAL.to_string()),
                    empty_default: RiskLevel::Low,
                    safety_policy: Some(SafetyPolicy {
                        trigger_at: RiskLevel::High,
                        minimum_overall: RiskLevel::High,
                        override_recommendation: SUICIDE_OVERRIDE.to_string(),
                    }),
                }
            });
        &DEFINITION
    }
}

fn total_bands(risk_map: CategoryRiskMap) -> Vec<ThresholdBand> {
    BandTable::new(risk_map)
        .up_to(
            13.0,
            Category::Low,
            "{subscale} is in the minimal range",
            &["No depression-specific action needed"],
        )
        .up_to(
            19.0,
            Category::LowModerate,
            "{subscale} indicates mild depression",
            &["Monitor mood", "Provide psychoeducation"],
        )
        .up_to(
            28.0,
            Category::Moderate,
            "{subscale} indicates moderate depression",
            &["Consider psychotherapy referral"],
        )
        .above(
            Category::Severe,
            "{subscale} indicates severe depression",
            &["Refer for therapy and medication evaluation"],
        )
}

/// Caution threshold is a rating of 2; a rating of 3 indicates intent.
fn suicide_bands(risk_map: CategoryRiskMap) -> Vec<ThresholdBand> {
    BandTable::new(risk_map)
        .below(
            2.0,
            Category::Low,
            "{subscale} is below the caution threshold",
            &["Continue to ask about suicidal thoughts at each contact"],
        )
        .below(
            3.0,
            Category::ModerateSevere,
            "{subscale} is at the caution threshold",
            &["Complete a suicide risk assessment", "Develop a safety plan"],
        )
        .above(
            Category::VeryHigh,
            "{subscale} indicates active suicidal intent",
            &[
                "Complete a suicide risk assessment immediately",
                "Do not leave the client unattended",
                "Arrange emergency evaluation",
            ],
        )
}
