// newscheck-core/src/headless.rs
// File: newscheck-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot, non-interactive classification.
//! Skips the history log entirely; useful for the CLI and scripting.

use anyhow::{Context, Result};

use crate::classifier::TextClassifier;
use crate::config::DetectorConfig;
use crate::history::trim_submission;
use crate::verdict::{Assessment, VerdictEngine};

/// Classifies a single text with the given configuration.
///
/// # Arguments
///
/// * `config` - The merged DetectorConfig (defaults + optional user overrides).
/// * `classifier` - Any `TextClassifier`, typically an `ArtifactClassifier`.
/// * `content` - The text to classify. Trimmed; empty input yields `Ok(None)`.
pub fn headless_classify(
    config: &DetectorConfig,
    classifier: &dyn TextClassifier,
    content: &str,
) -> Result<Option<Assessment>> {
    let text = trim_submission(content);
    if text.is_empty() {
        return Ok(None);
    }

    let engine = VerdictEngine::new(config.keywords.build_lexicon()?, config.scoring.weights());
    let output = classifier.classify(text).context("Classification failed")?;
    Ok(Some(engine.assess(text, output)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{FeatureVector, Label};
    use crate::errors::NewscheckResult;
    use crate::verdict::Verdict;

    struct Constant(f64);

    impl TextClassifier for Constant {
        fn transform(&self, _text: &str) -> NewscheckResult<FeatureVector> {
            Ok(FeatureVector::default())
        }
        fn predict(&self, _features: &FeatureVector) -> NewscheckResult<Label> {
            Ok(if self.0 > 0.0 { Label::Real } else { Label::Fake })
        }
        fn decision_function(&self, _features: &FeatureVector) -> NewscheckResult<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_headless_classify_fake() -> Result<()> {
        let config = DetectorConfig::load_default()?;
        let assessment = headless_classify(&config, &Constant(-2.0), "a quiet afternoon")?.unwrap();
        assert_eq!(assessment.verdict, Verdict::Fake);
        assert_eq!(assessment.confidence_display, "66.7% ML");
        Ok(())
    }

    #[test]
    fn test_headless_classify_blank_input() -> Result<()> {
        let config = DetectorConfig::load_default()?;
        assert!(headless_classify(&config, &Constant(1.0), "   \n")?.is_none());
        Ok(())
    }
}
