use claria_core::models::{Category, CategoryRiskMap, RiskLevel};

use crate::Instrument;
use crate::scoring::{BandTable, InstrumentDefinition, ThresholdBand, recommendation_table, subscale};

/// CTQ: Childhood Trauma Questionnaire (short form).
/// Five clinical scales of 5 items rated 1–5, each scale 5–25.
/// Cut points follow the none/low/moderate/severe ranges of the manual.
pub struct Ctq;

impl Instrument for Ctq {
    fn definition(&self) -> &InstrumentDefinition {
        static DEFINITION: std::sync::LazyLock<InstrumentDefinition> =
            std::sync::LazyLock::new(|| {
                let risk_map = CategoryRiskMap {
                    low_moderate: RiskLevel::Moderate,
                    ..CategoryRiskMap::default()
                };

                // (scale, upper bound of none, low, moderate)
                let scales = [
                    ("Emotional Abuse", 8.0, 12.0, 15.0),
                    ("Physical Abuse", 7.0, 9.0, 12.0),
                    ("Sexual Abuse", 5.0, 7.0, 12.0),
                    ("Emotional Neglect", 9.0, 14.0, 17.0),
                    ("Physical Neglect", 7.0, 9.0, 12.0),
                ];

                InstrumentDefinition {
                    id: "ctq".to_string(),
                    display_name: "CTQ".to_string(),
                    subscales: scales
                        .iter()
                        .map(|&(name, none, low, moderate)| {
                            subscale(name, exposure_bands(risk_map, none, low, moderate))
                        })
                        .collect(),
                    recommendation_table: recommendation_table([
                        (
                            RiskLevel::Low,
                            &[
                                "No significant childhood maltreatment reported",
                                "Continue standard care",
                            ],
                        ),
                        (
                            RiskLevel::Moderate,
                            &[
                                "Explore reported experiences in a follow-up interview",
                                "Monitor for trauma-related symptoms",
                                "Consider screening with the PCL-5",
                            ],
                        ),
                        (
                            RiskLevel::High,
                            &[
                                "Refer for trauma-focused assessment",
                                "Integrate trauma history into the treatment plan",
                                "Screen for PTSD, depression, and dissociation",
                            ],
                        ),
                        (
                            RiskLevel::VeryHigh,
                            &[
                                "Refer for specialized trauma treatment",
                                "Assess current safety and ongoing exposure",
                                "Review mandatory reporting obligations",
                                "Coordinate with the multidisciplinary care team",
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

fn exposure_bands(risk_map: CategoryRiskMap, none: f64, low: f64, moderate: f64) -> Vec<ThresholdBand> {
    BandTable::new(risk_map)
        .up_to(
            none,
            Category::Low,
            "{subscale}: none to minimal exposure reported",
            &["No specific follow-up required"],
        )
        .up_to(
            low,
            Category::LowModerate,
            "{subscale}: low to moderate exposure reported",
            &["Discuss reported experiences with the client"],
        )
        .up_to(
            moderate,
            Category::ModerateSevere,
            "{subscale}: moderate to severe exposure reported",
            &["Conduct a detailed trauma history", "Consider trauma-focused referral"],
        )
        .above(
            Category::Severe,
            "{subscale}: severe to extreme exposure reported",
            &["Refer for trauma-focused treatment", "Assess current safety"],
        )
}
