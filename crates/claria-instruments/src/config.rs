use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
const CURRENT_VERSION: u32 = 1;

/// What to do with a request for an instrument the catalog does not define.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownInstrumentPolicy {
    /// Interpret with the generic bands and recommendations.
    #[default]
    Fallback,
    /// Return [`crate::error::InstrumentError::UnknownInstrument`].
    Reject,
}

impl FromStr for UnknownInstrumentPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "reject" => Ok(Self::Reject),
            other => Err(ConfigError::InvalidPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub unknown_instrument: UnknownInstrumentPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            unknown_instrument: UnknownInstrumentPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_unknown_instrument(mut self, policy: UnknownInstrumentPolicy) -> Self {
        self.unknown_instrument = policy;
        self
    }

    /// Parse a config document, upgrading older versions in place.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let on_disk_version = value
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        if on_disk_version > CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: on_disk_version,
                supported: CURRENT_VERSION,
            });
        }

        let mut config: EngineConfig = serde_json::from_value(value)?;
        if on_disk_version < CURRENT_VERSION {
            tracing::debug!(from = on_disk_version, to = CURRENT_VERSION, "upgraded engine config");
        }
        config.config_version = CURRENT_VERSION;
        Ok(config)
    }
}
