use std::collections::BTreeMap;

use claria_core::models::{RiskLevel, SubscaleInterpretation};
use tracing::info;

use crate::scoring::InstrumentDefinition;

/// Overall risk for a set of classified subscales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub overall_risk_level: RiskLevel,
    /// Set when a critical-safety subscale reached the policy trigger.
    pub override_recommendation: Option<String>,
}

/// Combine per-subscale results into one risk level.
///
/// The overall level is the highest subscale level, or the instrument's
/// `empty_default` when nothing was scored. A critical-safety subscale at or
/// above the safety policy trigger raises the overall level to at least its own
/// level and the policy minimum, and yields the policy's override text.
pub fn aggregate(
    instrument: &InstrumentDefinition,
    per_subscale: &BTreeMap<String, SubscaleInterpretation>,
) -> Aggregation {
    let mut overall = per_subscale
        .values()
        .map(|i| i.risk_level)
        .max()
        .unwrap_or(instrument.empty_default);

    let mut override_recommendation = None;
    if let Some(policy) = &instrument.safety_policy {
        for (name, interpretation) in per_subscale {
            if !instrument.is_critical_safety(name) || interpretation.risk_level < policy.trigger_at
            {
                continue;
            }
            info!(
                instrument_id = %instrument.id,
                subscale = %name,
                risk_level = %interpretation.risk_level,
                "critical-safety subscale elevated, applying override"
            );
            overall = overall
                .max(interpretation.risk_level)
                .max(policy.minimum_overall);
            override_recommendation = Some(policy.override_recommendation.clone());
        }
    }

    Aggregation {
        overall_risk_level: overall,
        override_recommendation,
    }
}
