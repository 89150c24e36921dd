//! errors.rs - Custom error types for the newscheck-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

use newscheck_lexicon::LexiconError;

/// This enum represents all possible error types in the `newscheck-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NewscheckError {
    #[error("Failed to load artifact '{path}': {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },

    #[error("Artifact shape mismatch: {0}")]
    ArtifactShape(String),

    #[error("Classifier failed: {0}")]
    Classifier(String),

    #[error("Invalid keyword configuration: {0}")]
    InvalidKeyword(#[from] LexiconError),

    #[error("Invalid detector configuration: {0}")]
    ConfigError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

pub type NewscheckResult<T> = std::result::Result<T, NewscheckError>;
