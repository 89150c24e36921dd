// newscheck-core/src/engines/tfidf.rs
//! TF-IDF vectorizer restored from a JSON artifact.
//!
//! Tokenization follows the usual word pattern `\b\w\w+\b` (Unicode aware),
//! optionally lowercased, with stop words dropped before n-grams are formed.
//! License: MIT OR APACHE 2.0

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classifier::FeatureVector;
use crate::errors::{NewscheckError, NewscheckResult};

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// Row normalization applied after TF-IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

fn default_true() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Serialized form of a fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term (or space-joined n-gram) to feature index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    pub idf: Vec<f64>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
    #[serde(default)]
    pub stop_words: HashSet<String>,
}

impl TfidfVectorizer {
    /// Number of features produced by `transform`.
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Checks the internal consistency of a freshly deserialized artifact.
    pub fn validate(&self) -> NewscheckResult<()> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(NewscheckError::ArtifactShape(format!(
                "vectorizer vocabulary has {} terms but idf has {} weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if let Some((term, idx)) = self.vocabulary.iter().find(|(_, idx)| **idx >= self.idf.len()) {
            return Err(NewscheckError::ArtifactShape(format!(
                "vocabulary term '{}' has index {} outside idf length {}",
                term,
                idx,
                self.idf.len()
            )));
        }
        if let Some((idx, value)) = self.idf.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(NewscheckError::ArtifactShape(format!(
                "idf weight {} at index {} is not finite",
                value, idx
            )));
        }
        let (lo, hi) = self.ngram_range;
        if lo == 0 || lo > hi {
            return Err(NewscheckError::ArtifactShape(format!(
                "invalid ngram_range ({}, {})",
                lo, hi
            )));
        }
        Ok(())
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase { text.to_lowercase() } else { text.to_string() };
        TOKEN_PATTERN
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .filter(|tok| !self.stop_words.contains(tok))
            .collect()
    }

    fn ngrams(&self, tokens: &[String]) -> Vec<String> {
        let (lo, hi) = self.ngram_range;
        let mut grams = Vec::new();
        for n in lo..=hi {
            if n == 1 {
                grams.extend(tokens.iter().cloned());
            } else {
                grams.extend(tokens.windows(n).map(|w| w.join(" ")));
            }
        }
        grams
    }

    /// Vectorizes `text` into a sparse, normalized TF-IDF row.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let tokens = self.tokenize(text);
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for gram in self.ngrams(&tokens) {
            if let Some(&idx) = self.vocabulary.get(&gram) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (idx, tf * self.idf[idx])
            })
            .collect();

        let norm = match self.norm {
            Norm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Norm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            Norm::None => 0.0,
        };
        if norm > 0.0 {
            for (_, v) in entries.iter_mut() {
                *v /= norm;
            }
        }

        FeatureVector::new(self.dim(), entries)
    }
}
