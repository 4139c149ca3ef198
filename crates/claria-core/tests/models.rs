use claria_core::models::{
    Category, CategoryRiskMap, RiskLevel, ScoringRequest, ScoringResult, SubscaleInterpretation,
    numeric_score,
};
use serde_json::json;

#[test]
fn risk_levels_are_ordered() {
    assert!(RiskLevel::Low < RiskLevel::Moderate);
    assert!(RiskLevel::Moderate < RiskLevel::High);
    assert!(RiskLevel::High < RiskLevel::VeryHigh);
    assert!(RiskLevel::High.is_elevated());
    assert!(!RiskLevel::Moderate.is_elevated());
}

#[test]
fn category_serializes_as_display_label() {
    assert_eq!(
        serde_json::to_value(Category::ModerateSevere).unwrap(),
        json!("Moderate/Severe")
    );
    assert_eq!(
        serde_json::to_value(Category::LowModerate).unwrap(),
        json!("Low/Moderate")
    );
    let parsed: Category = serde_json::from_value(json!("Very High")).unwrap();
    assert_eq!(parsed, Category::VeryHigh);
    assert_eq!(Category::ModerateSevere.to_string(), "Moderate/Severe");
}

#[test]
fn default_risk_map_covers_every_category() {
    let map = CategoryRiskMap::default();
    assert!(map.is_monotonic());
    assert_eq!(map.risk_for(Category::Low), RiskLevel::Low);
    assert_eq!(map.risk_for(Category::ModerateSevere), RiskLevel::High);
    assert_eq!(map.risk_for(Category::Severe), RiskLevel::VeryHigh);
}

#[test]
fn inverted_risk_map_is_not_monotonic() {
    let map = CategoryRiskMap {
        severe: RiskLevel::Low,
        ..CategoryRiskMap::default()
    };
    assert!(!map.is_monotonic());
}

#[test]
fn numeric_score_accepts_numbers_and_numeric_strings() {
    assert_eq!(numeric_score(&json!(72)), Some(72.0));
    assert_eq!(numeric_score(&json!(2.5)), Some(2.5));
    assert_eq!(numeric_score(&json!(" 14 ")), Some(14.0));
}

#[test]
fn numeric_score_rejects_everything_else() {
    assert_eq!(numeric_score(&json!("high")), None);
    assert_eq!(numeric_score(&json!("")), None);
    assert_eq!(numeric_score(&json!("NaN")), None);
    assert_eq!(numeric_score(&json!("inf")), None);
    assert_eq!(numeric_score(&json!(null)), None);
    assert_eq!(numeric_score(&json!(true)), None);
    assert_eq!(numeric_score(&json!([1, 2])), None);
    assert_eq!(numeric_score(&json!({ "value": 3 })), None);
}

#[test]
fn request_uses_camel_case_fields() {
    let request: ScoringRequest = serde_json::from_value(json!({
        "instrumentId": "pcl5",
        "scores": { "Total Severity Score": 50 },
        "administrationDate": "2024-03-01",
        "clinicalNotes": "Referred by GP"
    }))
    .unwrap();

    assert_eq!(request.instrument_id, "pcl5");
    assert_eq!(request.administration_date, "2024-03-01");
    assert_eq!(request.clinical_notes.as_deref(), Some("Referred by GP"));
    assert_eq!(request.scores["Total Severity Score"], json!(50));
}

#[test]
fn request_notes_are_optional() {
    let request: ScoringRequest = serde_json::from_value(json!({
        "instrumentId": "ctq",
        "scores": {},
        "administrationDate": "2024-03-01"
    }))
    .unwrap();
    assert!(request.clinical_notes.is_none());
}

#[test]
fn result_serializes_stable_field_names() {
    let result = ScoringResult {
        instrument_id: "basc3".to_string(),
        display_name: "BASC-3".to_string(),
        scores: [("Depression".to_string(), json!(72))].into(),
        per_subscale: [(
            "Depression".to_string(),
            SubscaleInterpretation {
                category: Category::ModerateSevere,
                description: "Depression is clinically significant".to_string(),
                actions: vec!["Refer for therapy".to_string()],
                risk_level: RiskLevel::High,
            },
        )]
        .into(),
        total_score: None,
        overall_risk_level: RiskLevel::High,
        recommendations: vec!["Refer for individual therapy".to_string()],
        administration_date: "2024-03-01".to_string(),
        clinical_notes: None,
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["instrumentId"], json!("basc3"));
    assert_eq!(value["displayName"], json!("BASC-3"));
    assert_eq!(value["overallRiskLevel"], json!("High"));
    assert_eq!(value["administrationDate"], json!("2024-03-01"));
    assert_eq!(
        value["perSubscale"]["Depression"]["category"],
        json!("Moderate/Severe")
    );
    assert_eq!(value["perSubscale"]["Depression"]["riskLevel"], json!("High"));
    assert!(value.get("totalScore").is_none());
    assert!(value.get("clinicalNotes").is_none());
}
