use claria_core::models::{Category, CategoryRiskMap, RiskLevel};

use crate::Instrument;
use crate::scoring::{BandTable, InstrumentDefinition, ThresholdBand, recommendation_table, subscale};

pub const TOTAL_SEVERITY: &str = "Total Severity Score";

/// PCL-5: PTSD Checklist for DSM-5.
/// 20 items rated 0–4. Total 0–80 plus four DSM-5 symptom clusters.
/// Mild cluster elevations already count as moderate risk.
pub struct Pcl5;

impl Instrument for Pcl5 {
    fn definition(&self) -> &InstrumentDefinition {
        static DEFINITION: std::sync::LazyLock<InstrumentDefinition> =
            std::sync::LazyLock::new(|| {
                let risk_map = CategoryRiskMap {
                    low_moderate: RiskLevel::Moderate,
                    ..CategoryRiskMap::default()
                };

                InstrumentDefinition {
                    id: "pcl5".to_string(),
                    display_name: "PCL-5".to_string(),
                    subscales: vec![
                        subscale(TOTAL_SEVERITY, total_severity(risk_map)),
                        subscale(
                            "Criterion B (Intrusion)",
                            cluster(risk_map, 6.0, 12.0, 16.0),
                        ),
                        subscale(
                            "Criterion C (Avoidance)",
                            cluster(risk_map, 2.0, 4.0, 6.0),
                        ),
                        subscale(
                            "Criterion D (Negative Alterations in Cognition and Mood)",
                            cluster(risk_map, 7.0, 14.0, 21.0),
                        ),
                        subscale(
                            "Criterion E (Alterations in Arousal and Reactivity)",
                            cluster(risk_map, 6.0, 12.0, 18.0),
                        ),
                    ],
                    recommendation_table: recommendation_table([
                        (
                            RiskLevel::Low,
                            &[
                                "No PTSD-specific treatment indicated at this time",
                                "Provide psychoeducation on common trauma responses",
                            ],
                        ),
                        (
                            RiskLevel::Moderate,
                            &[
                                "Monitor trauma symptoms at each session",
                                "Consider trauma-informed supportive counseling",
                                "Re-administer PCL-5 in 4 weeks",
                            ],
                        ),
                        (
                            RiskLevel::High,
                            &[
                                "Conduct a structured diagnostic interview (CAPS-5)",
                                "Refer for trauma-focused psychotherapy",
                                "Screen for co-occurring depression and substance use",
                            ],
                        ),
                        (
                            RiskLevel::VeryHigh,
                            &[
                                "Prioritize referral for trauma-focused psychotherapy (CPT or PE)",
                                "Assess current safety and access to support",
                                "Evaluate need for psychiatric medication consultation",
                                "Schedule weekly follow-up",
                            ],
                        ),
                    ]),
                    category_risk_map: risk_map,
                    total_subscale: Some(TOTAL_SEVERITY.to_string()),
                    empty_default: RiskLevel::Low,
                    safety_policy: None,
                }
            });
        &DEFINITION
    }
}

fn total_severity(risk_map: CategoryRiskMap) -> Vec<ThresholdBand> {
    BandTable::new(risk_map)
        .up_to(
            20.0,
            Category::Low,
            "{subscale} indicates minimal PTSD symptoms",
            &["No PTSD-specific action needed"],
        )
        .up_to(
            32.0,
            Category::Moderate,
            "{subscale} indicates subthreshold PTSD symptoms",
            &["Monitor symptoms", "Re-screen in 4 weeks"],
        )
        .up_to(
            44.0,
            Category::ModerateSevere,
            "{subscale} is above the probable PTSD cutoff",
            &["Confirm with a structured diagnostic interview", "Refer for trauma-focused therapy"],
        )
        .above(
            Category::Severe,
            "{subscale} indicates severe PTSD symptoms",
            &[
                "Prioritize trauma-focused treatment",
                "Assess functional impairment and safety",
            ],
        )
}

/// Band table for a symptom cluster. Arguments are the lowest scores of the
/// mild, moderate, and severe ranges.
fn cluster(risk_map: CategoryRiskMap, mild: f64, moderate: f64, severe: f64) -> Vec<ThresholdBand> {
    BandTable::new(risk_map)
        .below(
            mild,
            Category::Low,
            "{subscale} symptoms are minimal",
            &["No cluster-specific action needed"],
        )
        .below(
            moderate,
            Category::LowModerate,
            "{subscale} symptoms are mild",
            &["Monitor cluster symptoms between sessions"],
        )
        .below(
            severe,
            Category::Moderate,
            "{subscale} symptoms are moderate",
            &["Target this cluster in treatment planning"],
        )
        .above(
            Category::Severe,
            "{subscale} symptoms are severe",
            &["Address this cluster as a treatment priority"],
        )
}
