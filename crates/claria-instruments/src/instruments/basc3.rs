use claria_core::models::{Category, CategoryRiskMap, RiskLevel};

use crate::Instrument;
use crate::scoring::{BandTable, InstrumentDefinition, ThresholdBand, recommendation_table, subscale};

/// BASC-3: Behavior Assessment System for Children, Third Edition.
/// Clinical scales and problem composites, T-scores (mean 50, SD 10).
/// Higher T-scores indicate greater problems; cut points at 50/60/70/80.
pub struct Basc3;

impl Instrument for Basc3 {
    fn definition(&self) -> &InstrumentDefinition {
        static DEFINITION: std::sync::LazyLock<InstrumentDefinition> =
            std::sync::LazyLock::new(|| {
                let risk_map = CategoryRiskMap::default();
                let scales = [
                    "Hyperactivity",
                    "Aggression",
                    "Conduct Problems",
                    "Anxiety",
                    "Depression",
                    "Somatization",
                    "Attention Problems",
                    "Atypicality",
                    "Withdrawal",
                    "Externalizing Problems",
                    "Internalizing Problems",
                    "Behavioral Symptoms Index",
                ];

                InstrumentDefinition {
                    id: "basc3".to_string(),
                    display_name: "BASC-3".to_string(),
                    subscales: scales
                        .iter()
                        .map(|name| subscale(name, t_score_ladder(risk_map)))
                        .collect(),
                    recommendation_table: recommendation_table([
                        (
                            RiskLevel::Low,
                            &[
                                "Continue routine monitoring at school and home",
                                "Re-administer at the next scheduled review",
                            ],
                        ),
                        (
                            RiskLevel::Moderate,
                            &[
                                "Share findings with caregivers and teachers",
                                "Consider targeted behavioral supports",
                                "Re-administer within 3 to 6 months",
                            ],
                        ),
                        (
                            RiskLevel::High,
                            &[
                                "Refer for individual therapy",
                                "Develop a behavior intervention plan with the school team",
                                "Consider comprehensive psychological evaluation",
                            ],
                        ),
                        (
                            RiskLevel::VeryHigh,
                            &[
                                "Refer for intensive clinical intervention",
                                "Coordinate care across home, school, and treatment providers",
                                "Evaluate need for psychiatric consultation",
                                "Schedule close follow-up",
                            ],
                        ),
                    ]),
                    category_risk_map: risk_map,
                    total_subscale: None,
                    empty_default: RiskLevel::Low,
                    safety_policy: None,
                }
            });
        &DEFINITION
    }
}

fn t_score_ladder(risk_map: CategoryRiskMap) -> Vec<ThresholdBand> {
    BandTable::new(risk_map)
        .up_to(
            50.0,
            Category::Low,
            "{subscale} is within the average range",
            &["No intervention indicated"],
        )
        .up_to(
            60.0,
            Category::LowModerate,
            "{subscale} is in the upper average range",
            &["Monitor for changes"],
        )
        .up_to(
            70.0,
            Category::Moderate,
            "{subscale} is in the at-risk range",
            &["Monitor closely", "Consider preventive supports"],
        )
        .up_to(
            80.0,
            Category::ModerateSevere,
            "{subscale} is clinically significant",
            &["Refer for therapy", "Develop a targeted intervention plan"],
        )
        .above(
            Category::Severe,
            "{subscale} is markedly elevated",
            &[
                "Refer for intensive treatment",
                "Coordinate with a multidisciplinary team",
            ],
        )
}
