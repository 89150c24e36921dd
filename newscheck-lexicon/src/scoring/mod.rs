// newscheck-lexicon/src/scoring/mod.rs

use crate::keywords::CategoryCounts;
use crate::Confidence;

/// Additive boosts per matched keyword, plus the ceiling on the blended score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostWeights {
    pub global_weight: f64,
    pub country_weight: f64,
    pub history_weight: f64,
    pub confidence_cap: f64,
}

impl Default for BoostWeights {
    fn default() -> Self {
        Self {
            global_weight: 8.0,
            country_weight: 5.0,
            history_weight: 15.0,
            confidence_cap: 98.0,
        }
    }
}

/// Maps an unbounded decision score into `[0, 100]`: `|s| / (|s| + 1) * 100`.
/// An infinite score maps to exactly 100.
pub fn ml_confidence(decision_score: f64) -> Confidence {
    let magnitude = libm::fabs(decision_score);
    if magnitude.is_infinite() {
        return 100.0;
    }
    magnitude / (magnitude + 1.0) * 100.0
}

/// ML confidence plus keyword boosts, capped at `weights.confidence_cap`.
pub fn blend_confidence(ml: Confidence, counts: CategoryCounts, weights: &BoostWeights) -> Confidence {
    let boosted = ml
        + f64::from(counts.global) * weights.global_weight
        + f64::from(counts.country) * weights.country_weight
        + f64::from(counts.history) * weights.history_weight;
    libm::fmin(boosted, weights.confidence_cap)
}
