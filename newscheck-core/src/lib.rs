// newscheck-core/src/lib.rs
//! # newscheck Core Library
//!
//! `newscheck-core` provides the platform-independent logic for classifying
//! short news snippets as likely real or fake. It restores a pre-trained
//! TF-IDF vectorizer and linear model from JSON artifacts, blends the model's
//! decision score with keyword-category boosts, and applies a tiered verdict
//! policy. A bounded history log keeps the most recent verdicts.
//!
//! ## Modules
//!
//! * `config`: Keyword lists, scoring weights and history limits (YAML).
//! * `classifier`: The `TextClassifier` trait and the values crossing it.
//! * `engines`: Artifact-backed classifier (`TfidfVectorizer` + `LinearModel`).
//! * `verdict`: Confidence blending and the three-tier verdict policy.
//! * `history`: The bounded history log and preview truncation.
//! * `detector`: `NewsDetector`, the service object owning all of the above.
//! * `headless`: One-shot classification without history.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use newscheck_core::{ArtifactClassifier, DetectorConfig, NewsDetector};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let classifier = ArtifactClassifier::load("model.json", "vectorizer.json")?;
//! let config = DetectorConfig::load_default()?;
//! let detector = NewsDetector::new(Arc::new(classifier), &config)?;
//!
//! if let Some(assessment) = detector.submit("ISRO confirms lunar orbit insertion").await? {
//!     println!("{} ({})", assessment.verdict, assessment.confidence_display);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Classifier and artifact failures are reported as `NewscheckError`;
//! configuration loading uses `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod config;
pub mod detector;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod history;
pub mod verdict;

/// Re-exports the configuration types and helpers.
pub use config::{
    merge_config,
    validate_config,
    DetectorConfig,
    HistoryConfig,
    KeywordConfig,
    ScoringConfig,
    DEFAULT_HISTORY_CAPACITY,
    DEFAULT_PREVIEW_CHARS,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::{NewscheckError, NewscheckResult};

/// Re-exports the classifier seam and the artifact-backed implementation.
pub use classifier::{ClassifierOutput, FeatureVector, Label, TextClassifier};
pub use engines::ArtifactClassifier;
pub use engines::linear_model::LinearModel;
pub use engines::tfidf::{Norm, TfidfVectorizer};

/// Re-exports the verdict policy.
pub use verdict::{confidence_display, decide_verdict, Assessment, Verdict, VerdictEngine};

/// Re-exports the history log and the detector service.
pub use history::{preview, trim_submission, HistoryLog, HistoryRecord};
pub use detector::NewsDetector;

/// Re-exports the one-shot entry point.
pub use headless::headless_classify;
