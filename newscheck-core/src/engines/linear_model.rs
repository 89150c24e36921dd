// newscheck-core/src/engines/linear_model.rs
//! Binary linear classifier restored from a JSON artifact.
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use crate::classifier::{FeatureVector, Label};
use crate::errors::{NewscheckError, NewscheckResult};

fn default_classes() -> [i64; 2] {
    [0, 1]
}

/// Weights and bias of a fitted linear decision function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coef: Vec<f64>,
    pub intercept: f64,
    /// Raw class values; the second is predicted for positive scores.
    #[serde(default = "default_classes")]
    pub classes: [i64; 2],
}

impl LinearModel {
    pub fn dim(&self) -> usize {
        self.coef.len()
    }

    pub fn validate(&self) -> NewscheckResult<()> {
        if self.coef.is_empty() {
            return Err(NewscheckError::ArtifactShape("model has no coefficients".to_string()));
        }
        if !self.intercept.is_finite() || self.coef.iter().any(|c| !c.is_finite()) {
            return Err(NewscheckError::ArtifactShape("model contains non-finite weights".to_string()));
        }
        Ok(())
    }

    /// `coef · x + intercept`.
    pub fn decision_function(&self, features: &FeatureVector) -> NewscheckResult<f64> {
        if features.dim != self.coef.len() {
            return Err(NewscheckError::Classifier(format!(
                "feature vector has dimension {} but model expects {}",
                features.dim,
                self.coef.len()
            )));
        }
        let mut score = self.intercept;
        for &(idx, value) in &features.entries {
            let weight = self.coef.get(idx).ok_or_else(|| {
                NewscheckError::Classifier(format!("feature index {} out of range", idx))
            })?;
            score += weight * value;
        }
        Ok(score)
    }

    pub fn predict(&self, features: &FeatureVector) -> NewscheckResult<Label> {
        let score = self.decision_function(features)?;
        let class = if score > 0.0 { self.classes[1] } else { self.classes[0] };
        Ok(Label::from_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        LinearModel { coef: vec![2.0, -1.0, 0.5], intercept: -0.25, classes: [0, 1] }
    }

    #[test]
    fn test_decision_function_is_dot_plus_intercept() {
        let fv = FeatureVector::new(3, vec![(0, 0.5), (2, 1.0)]);
        let score = model().decision_function(&fv).unwrap();
        assert!((score - 1.25).abs() < 1e-12);
        assert_eq!(model().predict(&fv).unwrap(), Label::Real);
    }

    #[test]
    fn test_zero_score_predicts_first_class() {
        let m = LinearModel { coef: vec![1.0], intercept: 0.0, classes: [0, 1] };
        let fv = FeatureVector::new(1, vec![]);
        assert_eq!(m.predict(&fv).unwrap(), Label::Fake);
    }

    #[test]
    fn test_dimension_mismatch_is_a_classifier_error() {
        let fv = FeatureVector::new(5, vec![(4, 1.0)]);
        assert!(matches!(model().decision_function(&fv), Err(NewscheckError::Classifier(_))));
    }
}
