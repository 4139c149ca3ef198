//! Threshold catalog: the read-only set of instrument definitions.
//!
//! Built once at startup and shared by reference. Lookups never fail; an
//! unknown instrument or subscale resolves to the generic configuration.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use claria_core::models::RiskLevel;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::instruments::generic::{generic_bands, generic_definition};
use crate::scoring::{InstrumentDefinition, SubscaleDefinition, ThresholdBand};

#[derive(Debug, Clone, Default)]
pub struct ThresholdCatalog {
    instruments: BTreeMap<String, InstrumentDefinition>,
}

impl ThresholdCatalog {
    /// The catalog of built-in instruments, initialised on first use.
    pub fn builtin() -> &'static ThresholdCatalog {
        static CATALOG: std::sync::LazyLock<ThresholdCatalog> = std::sync::LazyLock::new(|| {
            let instruments = crate::all_instruments()
                .iter()
                .map(|i| (i.id().to_string(), i.definition().clone()))
                .collect();
            ThresholdCatalog { instruments }
        });
        &CATALOG
    }

    /// Build a catalog from definitions, rejecting any that break the band invariants.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = InstrumentDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for definition in definitions {
            catalog.insert(definition)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of instrument definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<InstrumentDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Add the definitions in a JSON array, replacing instruments with the same id.
    ///
    /// Nothing is added unless every definition in the array is valid.
    pub fn extend_from_json(&mut self, json: &str) -> Result<(), CatalogError> {
        let additions = Self::from_json(json)?;
        for (id, definition) in additions.instruments {
            if self.instruments.insert(id.clone(), definition).is_some() {
                info!(instrument_id = %id, "replaced instrument definition");
            } else {
                debug!(instrument_id = %id, "added instrument definition");
            }
        }
        Ok(())
    }

    /// Validate and add one definition. Returns the definition it replaced, if any.
    pub fn insert(
        &mut self,
        definition: InstrumentDefinition,
    ) -> Result<Option<InstrumentDefinition>, CatalogError> {
        validate_definition(&definition)?;
        Ok(self.instruments.insert(definition.id.clone(), definition))
    }

    pub fn instrument(&self, instrument_id: &str) -> Option<&InstrumentDefinition> {
        self.instruments.get(instrument_id)
    }

    /// The known definition, or a generic stand-in carrying `instrument_id`.
    pub fn resolve(&self, instrument_id: &str) -> Cow<'_, InstrumentDefinition> {
        match self.instrument(instrument_id) {
            Some(definition) => Cow::Borrowed(definition),
            None => {
                debug!(instrument_id, "unknown instrument, using generic configuration");
                Cow::Owned(generic_definition(instrument_id))
            }
        }
    }

    /// Ordered bands for an instrument's subscale, falling back to the generic bands.
    pub fn lookup(&self, instrument_id: &str, subscale_name: &str) -> &[ThresholdBand] {
        match self.instrument(instrument_id) {
            Some(definition) => definition.bands_for(subscale_name),
            None => generic_bands(),
        }
    }

    /// Definitions in instrument id order.
    pub fn instruments(&self) -> impl Iterator<Item = &InstrumentDefinition> {
        self.instruments.values()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Check every definition against the band invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.instruments.values().try_for_each(validate_definition)
    }
}

/// Check one definition: contiguous, ascending, exhaustive bands whose risk
/// levels agree with the category map, plus a complete recommendation table.
pub fn validate_definition(definition: &InstrumentDefinition) -> Result<(), CatalogError> {
    let instrument_id = &definition.id;
    if instrument_id.trim().is_empty() {
        return Err(CatalogError::EmptyInstrumentId);
    }

    if !definition.category_risk_map.is_monotonic() {
        return Err(CatalogError::RiskMapNotMonotonic {
            instrument_id: instrument_id.clone(),
        });
    }

    let mut seen = HashSet::new();
    for subscale in &definition.subscales {
        if !seen.insert(subscale.name.as_str()) {
            return Err(CatalogError::DuplicateSubscale {
                instrument_id: instrument_id.clone(),
                subscale: subscale.name.clone(),
            });
        }
        validate_bands(definition, subscale)?;

        if subscale.is_critical_safety && definition.safety_policy.is_none() {
            return Err(CatalogError::MissingSafetyPolicy {
                instrument_id: instrument_id.clone(),
                subscale: subscale.name.clone(),
            });
        }
    }

    if let Some(policy) = &definition.safety_policy {
        if policy.trigger_at > RiskLevel::High {
            return Err(CatalogError::SafetyTriggerTooHigh {
                instrument_id: instrument_id.clone(),
                trigger_at: policy.trigger_at,
            });
        }
        if policy.minimum_overall < policy.trigger_at {
            return Err(CatalogError::SafetyMinimumBelowTrigger {
                instrument_id: instrument_id.clone(),
                minimum_overall: policy.minimum_overall,
                trigger_at: policy.trigger_at,
            });
        }
    }

    if let Some(total) = &definition.total_subscale
        && definition.subscale(total).is_none()
    {
        return Err(CatalogError::UnknownTotalSubscale {
            instrument_id: instrument_id.clone(),
            subscale: total.clone(),
        });
    }

    for level in RiskLevel::ALL {
        if definition.recommendations(level).is_empty() {
            return Err(CatalogError::MissingRecommendations {
                instrument_id: instrument_id.clone(),
                level,
            });
        }
    }

    Ok(())
}

fn validate_bands(
    definition: &InstrumentDefinition,
    subscale: &SubscaleDefinition,
) -> Result<(), CatalogError> {
    let instrument_id = || definition.id.clone();
    let name = || subscale.name.clone();
    let bands = &subscale.bands;

    let Some(last) = bands.last() else {
        return Err(CatalogError::EmptyBands {
            instrument_id: instrument_id(),
            subscale: name(),
        });
    };
    if last.upper_bound_inclusive.is_some() {
        return Err(CatalogError::MissingTerminalBand {
            instrument_id: instrument_id(),
            subscale: name(),
        });
    }

    let mut previous: Option<&ThresholdBand> = None;
    for (index, band) in bands.iter().enumerate() {
        match band.upper_bound_inclusive {
            Some(bound) if !bound.is_finite() => {
                return Err(CatalogError::NonFiniteBound {
                    instrument_id: instrument_id(),
                    subscale: name(),
                    index,
                });
            }
            None if index + 1 != bands.len() => {
                return Err(CatalogError::UnboundedBeforeEnd {
                    instrument_id: instrument_id(),
                    subscale: name(),
                    index,
                });
            }
            _ => {}
        }

        let expected = definition.category_risk_map.risk_for(band.category);
        if band.risk_level != expected {
            return Err(CatalogError::RiskMismatch {
                instrument_id: instrument_id(),
                subscale: name(),
                index,
                category: band.category,
                expected,
                found: band.risk_level,
            });
        }

        if let Some(prev) = previous {
            if let (Some(bound), Some(prev_bound)) =
                (band.upper_bound_inclusive, prev.upper_bound_inclusive)
                && bound <= prev_bound
            {
                return Err(CatalogError::UnorderedBound {
                    instrument_id: instrument_id(),
                    subscale: name(),
                    index,
                    bound,
                    previous: prev_bound,
                });
            }
            if band.category < prev.category {
                return Err(CatalogError::CategoryOrder {
                    instrument_id: instrument_id(),
                    subscale: name(),
                    index,
                    category: band.category,
                });
            }
        }
        previous = Some(band);
    }

    Ok(())
}
