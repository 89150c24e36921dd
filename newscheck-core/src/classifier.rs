// newscheck-core/src/classifier.rs
//! Defines the `TextClassifier` trait and the values that cross it.
//!
//! The trait mirrors the three calls the verdict pipeline makes against a
//! trained model: vectorize the text, predict a label, and read the signed
//! decision score. Concrete implementations live in `engines`.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use crate::errors::NewscheckResult;

/// Binary class label. `Real` corresponds to class `1` in the trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    /// Maps a raw model class (`1` = real) to a label.
    pub fn from_class(class: i64) -> Self {
        if class == 1 { Label::Real } else { Label::Fake }
    }

    pub fn as_class(self) -> i64 {
        match self {
            Label::Fake => 0,
            Label::Real => 1,
        }
    }
}

/// Raw model output for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    pub label: Label,
    /// Signed distance from the separating hyperplane.
    pub decision_score: f64,
}

/// Sparse feature vector: `(index, value)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    pub dim: usize,
    pub entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    pub fn new(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(idx, _)| *idx);
        Self { dim, entries }
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// A trained text classifier.
///
/// Implementations must be usable from several request handlers at once.
pub trait TextClassifier: Send + Sync {
    /// Turns raw text into the model's feature space.
    fn transform(&self, text: &str) -> NewscheckResult<FeatureVector>;

    /// Predicts the class label for an already-vectorized text.
    fn predict(&self, features: &FeatureVector) -> NewscheckResult<Label>;

    /// Returns the signed decision score for an already-vectorized text.
    fn decision_function(&self, features: &FeatureVector) -> NewscheckResult<f64>;

    /// Runs the full transform/predict/decision sequence.
    fn classify(&self, text: &str) -> NewscheckResult<ClassifierOutput> {
        let features = self.transform(text)?;
        let label = self.predict(&features)?;
        let decision_score = self.decision_function(&features)?;
        Ok(ClassifierOutput { label, decision_score })
    }
}
