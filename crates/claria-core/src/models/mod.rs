pub mod assessment;
pub mod interpretation;
pub mod risk;

pub use assessment::{ScoringRequest, numeric_score};
pub use interpretation::{ScoringResult, SubscaleInterpretation};
pub use risk::{Category, CategoryRiskMap, RiskLevel};
