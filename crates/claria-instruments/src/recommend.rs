use claria_core::models::RiskLevel;

use crate::scoring::InstrumentDefinition;

/// Canned recommendations for an instrument at `level`.
///
/// An override is placed first and the table list follows unchanged, even if
/// the table already contains similar text.
pub fn select(
    instrument: &InstrumentDefinition,
    level: RiskLevel,
    override_recommendation: Option<&str>,
) -> Vec<String> {
    let table = instrument.recommendations(level);
    let mut recommendations = Vec::with_capacity(table.len() + 1);
    if let Some(text) = override_recommendation {
        recommendations.push(text.to_string());
    }
    recommendations.extend(table.iter().cloned());
    recommendations
}
