use claria_core::models::SubscaleInterpretation;

use crate::scoring::ThresholdBand;

/// Index of the band a score falls into.
///
/// The first band whose inclusive upper bound is at or above the score wins,
/// so a score equal to a cut point takes the lower category. Scores above every
/// finite bound take the last band. Returns `None` for an empty table or a
/// non-finite score.
pub fn band_index(score: f64, bands: &[ThresholdBand]) -> Option<usize> {
    if !score.is_finite() || bands.is_empty() {
        return None;
    }
    let index = bands
        .iter()
        .position(|band| band.contains(score))
        .unwrap_or(bands.len() - 1);
    Some(index)
}

/// Classify one subscale score against its band table.
pub fn classify(
    score: f64,
    bands: &[ThresholdBand],
    subscale_name: &str,
) -> Option<SubscaleInterpretation> {
    let band = &bands[band_index(score, bands)?];
    Some(SubscaleInterpretation {
        category: band.category,
        description: band.describe(subscale_name),
        actions: band.actions.clone(),
        risk_level: band.risk_level,
    })
}
