// newscheck-core/tests/common/mod.rs
#![allow(dead_code)]

use newscheck_core::{FeatureVector, Label, NewscheckError, NewscheckResult, TextClassifier};

/// Returns the same label and decision score for every text.
pub struct FixedClassifier {
    pub label: Label,
    pub decision_score: f64,
}

impl FixedClassifier {
    pub fn new(label: Label, decision_score: f64) -> Self {
        Self { label, decision_score }
    }
}

impl TextClassifier for FixedClassifier {
    fn transform(&self, _text: &str) -> NewscheckResult<FeatureVector> {
        Ok(FeatureVector::default())
    }

    fn predict(&self, _features: &FeatureVector) -> NewscheckResult<Label> {
        Ok(self.label)
    }

    fn decision_function(&self, _features: &FeatureVector) -> NewscheckResult<f64> {
        Ok(self.decision_score)
    }
}

/// Fails to vectorize any text containing `trigger`.
pub struct FailingClassifier {
    pub trigger: &'static str,
}

impl TextClassifier for FailingClassifier {
    fn transform(&self, text: &str) -> NewscheckResult<FeatureVector> {
        if text.contains(self.trigger) {
            Err(NewscheckError::Classifier("vectorizer exploded".to_string()))
        } else {
            Ok(FeatureVector::default())
        }
    }

    fn predict(&self, _features: &FeatureVector) -> NewscheckResult<Label> {
        Ok(Label::Fake)
    }

    fn decision_function(&self, _features: &FeatureVector) -> NewscheckResult<f64> {
        Ok(-1.0)
    }
}
