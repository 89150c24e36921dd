// newscheck-core/src/engines/mod.rs
//! Concrete `TextClassifier` implementations backed by trained artifacts.

pub mod linear_model;
pub mod tfidf;

use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

use crate::classifier::{FeatureVector, Label, TextClassifier};
use crate::errors::{NewscheckError, NewscheckResult};
use linear_model::LinearModel;
use tfidf::TfidfVectorizer;

/// A TF-IDF vectorizer paired with a linear model, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    vectorizer: TfidfVectorizer,
    model: LinearModel,
    fingerprint: String,
}

impl ArtifactClassifier {
    /// Pairs an in-memory vectorizer and model after checking that their shapes agree.
    pub fn new(vectorizer: TfidfVectorizer, model: LinearModel) -> NewscheckResult<Self> {
        vectorizer.validate()?;
        model.validate()?;
        if vectorizer.dim() != model.dim() {
            return Err(NewscheckError::ArtifactShape(format!(
                "vectorizer produces {} features but model has {} coefficients",
                vectorizer.dim(),
                model.dim()
            )));
        }
        Ok(Self { vectorizer, model, fingerprint: String::new() })
    }

    /// Loads `model_path` and `vectorizer_path` (JSON) and validates them together.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(model_path: P, vectorizer_path: Q) -> NewscheckResult<Self> {
        let (model, model_digest): (LinearModel, String) = read_artifact(model_path.as_ref())?;
        let (vectorizer, vec_digest): (TfidfVectorizer, String) = read_artifact(vectorizer_path.as_ref())?;

        let mut classifier = Self::new(vectorizer, model)?;
        classifier.fingerprint = format!("{}:{}", &model_digest[..12], &vec_digest[..12]);

        info!(
            "Loaded classifier artifacts ({} features, fingerprint {}).",
            classifier.model.dim(),
            classifier.fingerprint
        );
        Ok(classifier)
    }

    /// Short SHA-256 prefixes of the model and vectorizer files; empty when built in memory.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn dim(&self) -> usize {
        self.model.dim()
    }
}

impl TextClassifier for ArtifactClassifier {
    fn transform(&self, text: &str) -> NewscheckResult<FeatureVector> {
        Ok(self.vectorizer.transform(text))
    }

    fn predict(&self, features: &FeatureVector) -> NewscheckResult<Label> {
        self.model.predict(features)
    }

    fn decision_function(&self, features: &FeatureVector) -> NewscheckResult<f64> {
        self.model.decision_function(features)
    }
}

/// Reads and deserializes one JSON artifact, returning it with its hex SHA-256.
fn read_artifact<T: DeserializeOwned>(path: &Path) -> NewscheckResult<(T, String)> {
    let bytes = std::fs::read(path).map_err(|e| NewscheckError::ArtifactLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let digest = hex::encode(Sha256::digest(&bytes));
    let value = serde_json::from_slice(&bytes).map_err(|e| NewscheckError::ArtifactLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    log::debug!("Read artifact {} (sha256 {}).", path.display(), digest);
    Ok((value, digest))
}
