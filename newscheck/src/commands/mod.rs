// newscheck/src/commands/mod.rs
//! Command implementations and the loading steps they share.

pub mod check;
pub mod serve;

use anyhow::{Context, Result};
use log::info;

use newscheck_core::{merge_config, ArtifactClassifier, DetectorConfig};

use crate::cli::ArtifactArgs;

/// Loads the built-in configuration and overlays the user file, if any.
pub fn load_detector_config(args: &ArtifactArgs) -> Result<DetectorConfig> {
    let default_config = DetectorConfig::load_default()?;
    let user_config = match &args.config {
        Some(path) => Some(DetectorConfig::load_from_file(path)?),
        None => None,
    };
    Ok(merge_config(default_config, user_config))
}

/// Loads the model and vectorizer artifacts. Failure here is fatal to startup.
pub fn load_classifier(args: &ArtifactArgs) -> Result<ArtifactClassifier> {
    info!(
        "Loading model from {} and vectorizer from {}.",
        args.model.display(),
        args.vectorizer.display()
    );
    ArtifactClassifier::load(&args.model, &args.vectorizer).context("Failed to load classifier artifacts")
}
