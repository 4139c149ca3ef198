use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw scores for one administration of an instrument, as collected by intake.
///
/// `scores` keeps the raw JSON values so that a malformed entry only drops that
/// subscale instead of failing the whole request. `administration_date` is carried
/// verbatim; its format is the intake layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoringRequest {
    pub instrument_id: String,
    pub scores: BTreeMap<String, serde_json::Value>,
    pub administration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
}

impl ScoringRequest {
    pub fn new(instrument_id: impl Into<String>, administration_date: impl Into<String>) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            scores: BTreeMap::new(),
            administration_date: administration_date.into(),
            clinical_notes: None,
        }
    }

    pub fn with_score(mut self, subscale: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.scores.insert(subscale.into(), value.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.clinical_notes = Some(notes.into());
        self
    }
}

/// Read a raw score as a finite number.
///
/// JSON numbers and numeric strings (surrounding whitespace ignored) are accepted.
/// Everything else, including `NaN`/`inf` strings, is treated as not scored.
pub fn numeric_score(value: &serde_json::Value) -> Option<f64> {
    let n = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
