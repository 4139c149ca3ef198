use claria_core::models::{Category, RiskLevel};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}

/// A threshold table that breaks the band invariants.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("instrument id is empty")]
    EmptyInstrumentId,

    #[error("instrument '{instrument_id}': subscale '{subscale}' is defined more than once")]
    DuplicateSubscale {
        instrument_id: String,
        subscale: String,
    },

    #[error("instrument '{instrument_id}': subscale '{subscale}' has no bands")]
    EmptyBands {
        instrument_id: String,
        subscale: String,
    },

    #[error("instrument '{instrument_id}': subscale '{subscale}' band {index} has a non-finite bound")]
    NonFiniteBound {
        instrument_id: String,
        subscale: String,
        index: usize,
    },

    #[error(
        "instrument '{instrument_id}': subscale '{subscale}' band {index} bound {bound} is not above the previous bound {previous}"
    )]
    UnorderedBound {
        instrument_id: String,
        subscale: String,
        index: usize,
        bound: f64,
        previous: f64,
    },

    #[error("instrument '{instrument_id}': subscale '{subscale}' band {index} is unbounded but not last")]
    UnboundedBeforeEnd {
        instrument_id: String,
        subscale: String,
        index: usize,
    },

    #[error("instrument '{instrument_id}': subscale '{subscale}' has no unbounded terminal band")]
    MissingTerminalBand {
        instrument_id: String,
        subscale: String,
    },

    #[error(
        "instrument '{instrument_id}': subscale '{subscale}' band {index} category {category} is below the previous band"
    )]
    CategoryOrder {
        instrument_id: String,
        subscale: String,
        index: usize,
        category: Category,
    },

    #[error(
        "instrument '{instrument_id}': subscale '{subscale}' band {index} ({category}) has risk {found}, the category map says {expected}"
    )]
    RiskMismatch {
        instrument_id: String,
        subscale: String,
        index: usize,
        category: Category,
        expected: RiskLevel,
        found: RiskLevel,
    },

    #[error("instrument '{instrument_id}': category risk map is not monotonic")]
    RiskMapNotMonotonic { instrument_id: String },

    #[error("instrument '{instrument_id}': no recommendations for risk level {level}")]
    MissingRecommendations {
        instrument_id: String,
        level: RiskLevel,
    },

    #[error("instrument '{instrument_id}': total subscale '{subscale}' is not defined")]
    UnknownTotalSubscale {
        instrument_id: String,
        subscale: String,
    },

    #[error("instrument '{instrument_id}': critical-safety subscale '{subscale}' has no safety policy")]
    MissingSafetyPolicy {
        instrument_id: String,
        subscale: String,
    },

    #[error("instrument '{instrument_id}': safety trigger {trigger_at} is above High")]
    SafetyTriggerTooHigh {
        instrument_id: String,
        trigger_at: RiskLevel,
    },

    #[error(
        "instrument '{instrument_id}': safety minimum {minimum_overall} is below the trigger {trigger_at}"
    )]
    SafetyMinimumBelowTrigger {
        instrument_id: String,
        minimum_overall: RiskLevel,
        trigger_at: RiskLevel,
    },

    #[error("catalog JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("unknown instrument policy '{0}', expected 'fallback' or 'reject'")]
    InvalidPolicy(String),

    #[error("config JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
}
