use std::collections::BTreeMap;

use claria_core::models::{Category, CategoryRiskMap, RiskLevel};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::instruments::generic::generic_bands;

/// Placeholder replaced with the subscale display name in band descriptions.
pub const SUBSCALE_PLACEHOLDER: &str = "{subscale}";

/// One contiguous score range of a subscale.
///
/// A band covers scores above the previous band's bound up to and including
/// `upper_bound_inclusive`. `None` marks the terminal, unbounded band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ThresholdBand {
    #[serde(default)]
    pub upper_bound_inclusive: Option<f64>,
    pub category: Category,
    pub risk_level: RiskLevel,
    pub description_template: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl ThresholdBand {
    pub fn contains(&self, score: f64) -> bool {
        self.upper_bound_inclusive.is_none_or(|upper| score <= upper)
    }

    pub fn describe(&self, subscale_name: &str) -> String {
        self.description_template.replace(SUBSCALE_PLACEHOLDER, subscale_name)
    }
}

/// A scored subscale and its ascending band table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubscaleDefinition {
    pub name: String,
    pub bands: Vec<ThresholdBand>,
    /// Elevation on this subscale triggers the instrument's safety override.
    #[serde(default)]
    pub is_critical_safety: bool,
}

/// Override applied when a critical-safety subscale is elevated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SafetyPolicy {
    /// Lowest subscale risk level that counts as triggered.
    pub trigger_at: RiskLevel,
    /// Overall risk level is raised to at least this when triggered.
    pub minimum_overall: RiskLevel,
    /// Prepended to the recommendation list when triggered.
    pub override_recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InstrumentDefinition {
    pub id: String,
    pub display_name: String,
    pub subscales: Vec<SubscaleDefinition>,
    pub recommendation_table: BTreeMap<RiskLevel, Vec<String>>,
    #[serde(default)]
    pub category_risk_map: CategoryRiskMap,
    /// Subscale whose score is reported as the instrument total.
    #[serde(default)]
    pub total_subscale: Option<String>,
    /// Overall risk level when no subscale could be scored.
    pub empty_default: RiskLevel,
    #[serde(default)]
    pub safety_policy: Option<SafetyPolicy>,
}

impl InstrumentDefinition {
    pub fn subscale(&self, name: &str) -> Option<&SubscaleDefinition> {
        self.subscales.iter().find(|s| s.name == name)
    }

    /// Bands for `name`, or the generic bands when the subscale is not defined here.
    pub fn bands_for(&self, name: &str) -> &[ThresholdBand] {
        match self.subscale(name) {
            Some(s) => &s.bands,
            None => generic_bands(),
        }
    }

    pub fn is_critical_safety(&self, name: &str) -> bool {
        self.subscale(name).is_some_and(|s| s.is_critical_safety)
    }

    pub fn recommendations(&self, level: RiskLevel) -> &[String] {
        self.recommendation_table
            .get(&level)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Builds the band table of one subscale from ascending cut points.
///
/// Risk levels come from the instrument's [`CategoryRiskMap`], so a built band
/// can never disagree with the map.
pub struct BandTable {
    risk_map: CategoryRiskMap,
    bands: Vec<ThresholdBand>,
}

impl BandTable {
    pub fn new(risk_map: CategoryRiskMap) -> Self {
        Self {
            risk_map,
            bands: Vec::new(),
        }
    }

    /// Add a band ending at `upper` (inclusive).
    pub fn up_to(self, upper: f64, category: Category, description: &str, actions: &[&str]) -> Self {
        self.push(Some(upper), category, description, actions)
    }

    /// Add a band ending just below `cutoff`, for scales whose cut points are
    /// the lowest score of the next range. Fractional scores under the cutoff
    /// stay in this band.
    pub fn below(self, cutoff: f64, category: Category, description: &str, actions: &[&str]) -> Self {
        self.push(Some(cutoff.next_down()), category, description, actions)
    }

    /// Add the terminal band covering every score above the last bound.
    pub fn above(self, category: Category, description: &str, actions: &[&str]) -> Vec<ThresholdBand> {
        self.push(None, category, description, actions).bands
    }

    fn push(
        mut self,
        upper: Option<f64>,
        category: Category,
        description: &str,
        actions: &[&str],
    ) -> Self {
        self.bands.push(ThresholdBand {
            upper_bound_inclusive: upper,
            category,
            risk_level: self.risk_map.risk_for(category),
            description_template: description.to_string(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
        });
        self
    }
}

pub(crate) fn subscale(name: &str, bands: Vec<ThresholdBand>) -> SubscaleDefinition {
    SubscaleDefinition {
        name: name.to_string(),
        bands,
        is_critical_safety: false,
    }
}

pub(crate) fn critical_subscale(name: &str, bands: Vec<ThresholdBand>) -> SubscaleDefinition {
    SubscaleDefinition {
        is_critical_safety: true,
        ..subscale(name, bands)
    }
}

pub(crate) fn recommendation_table(
    entries: [(RiskLevel, &[&str]); 4],
) -> BTreeMap<RiskLevel, Vec<String>> {
    entries
        .into_iter()
        .map(|(level, items)| (level, items.iter().map(|s| s.to_string()).collect()))
        .collect()
}
