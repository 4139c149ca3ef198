use std::collections::BTreeMap;

use claria_core::models::{ScoringRequest, ScoringResult, numeric_score};
use tracing::{debug, warn};

use crate::aggregate::aggregate;
use crate::catalog::ThresholdCatalog;
use crate::classify::classify;
use crate::config::{EngineConfig, UnknownInstrumentPolicy};
use crate::error::InstrumentError;
use crate::recommend::select;
use crate::scoring::InstrumentDefinition;

/// A catalog plus the policy for instruments it does not know.
///
/// Holds only shared, immutable state, so one engine can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct Engine<'a> {
    catalog: &'a ThresholdCatalog,
    config: EngineConfig,
}

impl<'a> Engine<'a> {
    pub fn new(catalog: &'a ThresholdCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a ThresholdCatalog {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Interpret a request, applying the configured unknown-instrument policy.
    pub fn interpret(&self, request: &ScoringRequest) -> Result<ScoringResult, InstrumentError> {
        if self.catalog.instrument(&request.instrument_id).is_none()
            && self.config.unknown_instrument == UnknownInstrumentPolicy::Reject
        {
            warn!(instrument_id = %request.instrument_id, "rejecting unconfigured instrument");
            return Err(InstrumentError::UnknownInstrument(
                request.instrument_id.clone(),
            ));
        }
        let definition = self.catalog.resolve(&request.instrument_id);
        Ok(interpret_with(&definition, request))
    }
}

impl Engine<'static> {
    /// Built-in catalog with the default (fallback) policy.
    pub fn builtin() -> Self {
        Self::new(ThresholdCatalog::builtin(), EngineConfig::default())
    }
}

/// Interpret a request against the built-in catalog.
///
/// Never fails: unknown instruments use the generic configuration and
/// non-numeric scores are left out of the result.
pub fn interpret(request: &ScoringRequest) -> ScoringResult {
    let definition = ThresholdCatalog::builtin().resolve(&request.instrument_id);
    interpret_with(&definition, request)
}

/// Classify, aggregate, and select recommendations for one resolved instrument.
pub fn interpret_with(definition: &InstrumentDefinition, request: &ScoringRequest) -> ScoringResult {
    let mut per_subscale = BTreeMap::new();
    for (name, raw) in &request.scores {
        let Some(score) = numeric_score(raw) else {
            debug!(subscale = %name, value = %raw, "non-numeric score, subscale omitted");
            continue;
        };
        if let Some(interpretation) = classify(score, definition.bands_for(name), name) {
            per_subscale.insert(name.clone(), interpretation);
        }
    }

    let aggregation = aggregate(definition, &per_subscale);
    let recommendations = select(
        definition,
        aggregation.overall_risk_level,
        aggregation.override_recommendation.as_deref(),
    );

    let total_score = definition
        .total_subscale
        .as_ref()
        .and_then(|total| request.scores.get(total))
        .and_then(numeric_score);

    debug!(
        instrument_id = %definition.id,
        scored = per_subscale.len(),
        overall_risk_level = %aggregation.overall_risk_level,
        "interpreted scores"
    );

    ScoringResult {
        instrument_id: request.instrument_id.clone(),
        display_name: definition.display_name.clone(),
        scores: request.scores.clone(),
        per_subscale,
        total_score,
        overall_risk_level: aggregation.overall_risk_level,
        recommendations,
        administration_date: request.administration_date.clone(),
        clinical_notes: request.clinical_notes.clone(),
    }
}
