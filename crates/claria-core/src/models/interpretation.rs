use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::{Category, RiskLevel};

/// Classification of a single subscale score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubscaleInterpretation {
    pub category: Category,
    pub description: String,
    pub actions: Vec<String>,
    pub risk_level: RiskLevel,
}

/// The interpreted outcome of a [`super::assessment::ScoringRequest`].
///
/// A derived value: rendering, storage, and trend layers consume it as-is, so
/// the serialized field names are part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoringResult {
    pub instrument_id: String,
    pub display_name: String,
    pub scores: BTreeMap<String, serde_json::Value>,
    pub per_subscale: BTreeMap<String, SubscaleInterpretation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,
    pub overall_risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub administration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
}
