use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Four-valued ordinal severity used to aggregate across subscales.
///
/// Variant order is the clinical order, so `Ord` gives `Low < Moderate < High < VeryHigh`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }

    /// Whether this level is High or above.
    pub fn is_elevated(&self) -> bool {
        *self >= RiskLevel::High
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Six-valued display category attached to a threshold band.
///
/// Serialized as the label shown on reports ("Moderate/Severe", not "ModerateSevere").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Category {
    Low,
    #[serde(rename = "Low/Moderate")]
    LowModerate,
    Moderate,
    #[serde(rename = "Moderate/Severe")]
    ModerateSevere,
    Severe,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Low,
        Category::LowModerate,
        Category::Moderate,
        Category::ModerateSevere,
        Category::Severe,
        Category::VeryHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Low => "Low",
            Category::LowModerate => "Low/Moderate",
            Category::Moderate => "Moderate",
            Category::ModerateSevere => "Moderate/Severe",
            Category::Severe => "Severe",
            Category::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Total mapping from display category to risk level.
///
/// One field per [`Category`] so a map can never leave a category unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryRiskMap {
    pub low: RiskLevel,
    pub low_moderate: RiskLevel,
    pub moderate: RiskLevel,
    pub moderate_severe: RiskLevel,
    pub severe: RiskLevel,
    pub very_high: RiskLevel,
}

impl CategoryRiskMap {
    pub fn risk_for(&self, category: Category) -> RiskLevel {
        match category {
            Category::Low => self.low,
            Category::LowModerate => self.low_moderate,
            Category::Moderate => self.moderate,
            Category::ModerateSevere => self.moderate_severe,
            Category::Severe => self.severe,
            Category::VeryHigh => self.very_high,
        }
    }

    /// True when a more severe category never maps to a lower risk level.
    pub fn is_monotonic(&self) -> bool {
        Category::ALL
            .windows(2)
            .all(|pair| self.risk_for(pair[0]) <= self.risk_for(pair[1]))
    }
}

impl Default for CategoryRiskMap {
    fn default() -> Self {
        Self {
            low: RiskLevel::Low,
            low_moderate: RiskLevel::Low,
            moderate: RiskLevel::Moderate,
            moderate_severe: RiskLevel::High,
            severe: RiskLevel::VeryHigh,
            very_high: RiskLevel::VeryHigh,
        }
    }
}
