// newscheck-core/src/verdict.rs
//! Verdict policy: blends model confidence with keyword boosts and picks a tier.
//!
//! Tiers are evaluated in a fixed priority order and the first match wins:
//!
//! 1. `Real` when the model says real, two or more global keywords match, a
//!    country keyword co-occurs with a global keyword, or any history keyword
//!    matches.
//! 2. `MostlyReal` when the model says real, any global keyword matches, or
//!    any history keyword matches. Given tier 1, this only fires for a single
//!    global keyword with no country or history match and a fake label.
//! 3. `Fake` otherwise. Its display uses the raw ML confidence, not the
//!    blended one.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use newscheck_lexicon::{blend_confidence, ml_confidence, BoostWeights, CategoryCounts, Lexicon};

use crate::classifier::{ClassifierOutput, Label};

/// One of the three verdict tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Real,
    MostlyReal,
    Fake,
}

impl Verdict {
    /// The banner shown to users.
    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Real => "✅ VERIFIED REAL NEWS",
            Verdict::MostlyReal => "🟡 MOSTLY REAL NEWS",
            Verdict::Fake => "❌ LIKELY FAKE NEWS",
        }
    }

    /// CSS class for the result banner.
    pub fn result_class(self) -> &'static str {
        match self {
            Verdict::Real => "real-btn",
            Verdict::MostlyReal => "maybe-btn",
            Verdict::Fake => "fake-btn",
        }
    }

    /// CSS class for a history entry.
    pub fn history_class(self) -> &'static str {
        match self {
            Verdict::Real => "history-real",
            Verdict::MostlyReal => "history-maybe",
            Verdict::Fake => "history-fake",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

/// Full result of scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub label: Label,
    pub decision_score: f64,
    pub ml_confidence: f64,
    pub final_confidence: f64,
    pub global_score: u32,
    pub country_score: u32,
    pub history_score: u32,
    pub confidence_display: String,
}

/// Picks the verdict tier from the model label and keyword counts.
pub fn decide_verdict(label: Label, counts: CategoryCounts) -> Verdict {
    let is_real = label == Label::Real;
    if is_real
        || counts.global >= 2
        || (counts.country >= 1 && counts.global >= 1)
        || counts.history >= 1
    {
        Verdict::Real
    } else if is_real || counts.global >= 1 || counts.history >= 1 {
        Verdict::MostlyReal
    } else {
        Verdict::Fake
    }
}

/// Formats the confidence string shown next to a verdict.
pub fn confidence_display(verdict: Verdict, counts: CategoryCounts, ml: f64, blended: f64) -> String {
    match verdict {
        Verdict::Real => {
            let boost = if counts.history >= 1 { "History Boost" } else { "Global Boost" };
            format!("{:.1}% ({})", blended, boost)
        }
        Verdict::MostlyReal => format!("{:.1}% (Keywords)", blended),
        Verdict::Fake => format!("{:.1}% ML", ml),
    }
}

/// Scores texts against a keyword lexicon and boost weights.
#[derive(Debug)]
pub struct VerdictEngine {
    lexicon: Lexicon,
    weights: BoostWeights,
}

impl VerdictEngine {
    pub fn new(lexicon: Lexicon, weights: BoostWeights) -> Self {
        Self { lexicon, weights }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn weights(&self) -> &BoostWeights {
        &self.weights
    }

    /// Applies the verdict policy to `text` given the model's output for it.
    pub fn assess(&self, text: &str, output: ClassifierOutput) -> Assessment {
        let ml = ml_confidence(output.decision_score);
        let counts = self.lexicon.count(text);
        let blended = blend_confidence(ml, counts, &self.weights);
        let verdict = decide_verdict(output.label, counts);
        let display = confidence_display(verdict, counts, ml, blended);

        debug!(
            "Scored text: label={:?} decision={:.4} global={} country={} history={} -> {:?} ({})",
            output.label, output.decision_score, counts.global, counts.country, counts.history, verdict, display
        );

        Assessment {
            verdict,
            label: output.label,
            decision_score: output.decision_score,
            ml_confidence: ml,
            final_confidence: blended,
            global_score: counts.global,
            country_score: counts.country,
            history_score: counts.history,
            confidence_display: display,
        }
    }
}
