//! Configuration management for `newscheck-core`.
//!
//! This module defines the keyword lists, scoring weights and history limits
//! that drive the verdict policy. It handles deserialization of YAML
//! configurations and provides utilities for loading, merging, and validating
//! these configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use log::{debug, info};

use newscheck_lexicon::{BoostWeights, Lexicon};

/// Default number of records retained by the history log.
pub const DEFAULT_HISTORY_CAPACITY: usize = 8;

/// Default number of characters kept in a history preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 80;

/// Keyword lists for the three boost categories.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct KeywordConfig {
    /// Organizations, agencies and outlets.
    pub global: Option<Vec<String>>,
    /// Nation names.
    pub country: Option<Vec<String>>,
    /// Historical-event terms.
    pub history: Option<Vec<String>>,
}

impl KeywordConfig {
    /// Builds the matching automata. Missing lists match nothing.
    pub fn build_lexicon(&self) -> Result<Lexicon> {
        let lexicon = Lexicon::new(
            self.global.as_deref().unwrap_or(&[]),
            self.country.as_deref().unwrap_or(&[]),
            self.history.as_deref().unwrap_or(&[]),
        )
        .map_err(anyhow::Error::new)
        .context("Failed to build keyword lexicon")?;
        Ok(lexicon)
    }
}

/// Confidence boost weights and the cap on the blended score.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Boost per matched global keyword (default: 8.0).
    pub global_weight: Option<f64>,
    /// Boost per matched country keyword (default: 5.0).
    pub country_weight: Option<f64>,
    /// Boost per matched history keyword (default: 15.0).
    pub history_weight: Option<f64>,
    /// Ceiling on the blended confidence (default: 98.0).
    pub confidence_cap: Option<f64>,
}

impl ScoringConfig {
    pub fn weights(&self) -> BoostWeights {
        let defaults = BoostWeights::default();
        BoostWeights {
            global_weight: self.global_weight.unwrap_or(defaults.global_weight),
            country_weight: self.country_weight.unwrap_or(defaults.country_weight),
            history_weight: self.history_weight.unwrap_or(defaults.history_weight),
            confidence_cap: self.confidence_cap.unwrap_or(defaults.confidence_cap),
        }
    }
}

/// Limits for the rolling history log.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct HistoryConfig {
    /// Maximum number of retained records (default: 8).
    pub capacity: Option<usize>,
    /// Characters kept before the text is cut and marked with "..." (default: 80).
    pub preview_chars: Option<usize>,
}

impl HistoryConfig {
    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn preview_chars(&self) -> usize {
        self.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS)
    }
}

/// Represents the top-level configuration structure for newscheck.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct DetectorConfig {
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

impl DetectorConfig {
    /// Loads a detector configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading detector config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DetectorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Loads the built-in keyword lists and weights from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default detector config from embedded string...");
        let default_yaml = include_str!("../config/default_detector.yaml");
        let config: DetectorConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default detector config")?;

        debug!(
            "Loaded default keywords: {} global, {} country, {} history.",
            config.keywords.global.as_ref().map_or(0, Vec::len),
            config.keywords.country.as_ref().map_or(0, Vec::len),
            config.keywords.history.as_ref().map_or(0, Vec::len),
        );
        Ok(config)
    }
}

/// Overlays user-provided sections onto the defaults.
///
/// A keyword list present in the user config replaces the default list for
/// that category; scalar settings are replaced individually.
pub fn merge_config(default_config: DetectorConfig, user_config: Option<DetectorConfig>) -> DetectorConfig {
    let mut merged = default_config;

    let user = match user_config {
        Some(u) => u,
        None => return merged,
    };

    if let Some(global) = user.keywords.global {
        debug!("Overriding global keywords ({} entries).", global.len());
        merged.keywords.global = Some(global);
    }
    if let Some(country) = user.keywords.country {
        debug!("Overriding country keywords ({} entries).", country.len());
        merged.keywords.country = Some(country);
    }
    if let Some(history) = user.keywords.history {
        debug!("Overriding history keywords ({} entries).", history.len());
        merged.keywords.history = Some(history);
    }

    merged.scoring.global_weight = user.scoring.global_weight.or(merged.scoring.global_weight);
    merged.scoring.country_weight = user.scoring.country_weight.or(merged.scoring.country_weight);
    merged.scoring.history_weight = user.scoring.history_weight.or(merged.scoring.history_weight);
    merged.scoring.confidence_cap = user.scoring.confidence_cap.or(merged.scoring.confidence_cap);

    merged.history.capacity = user.history.capacity.or(merged.history.capacity);
    merged.history.preview_chars = user.history.preview_chars.or(merged.history.preview_chars);

    merged
}

/// Validates keyword lists and numeric limits.
pub fn validate_config(config: &DetectorConfig) -> Result<()> {
    let mut errors = Vec::new();

    let categories = [
        ("global", &config.keywords.global),
        ("country", &config.keywords.country),
        ("history", &config.keywords.history),
    ];
    for (category, list) in categories {
        let Some(list) = list else { continue };
        let mut seen = HashSet::new();
        for keyword in list {
            let normalized = keyword.to_lowercase();
            if normalized.trim().is_empty() {
                errors.push(format!("Category '{}' contains an empty keyword.", category));
            } else if !seen.insert(normalized) {
                errors.push(format!("Duplicate keyword '{}' in category '{}'.", keyword, category));
            }
        }
    }

    let weights = [
        ("global_weight", config.scoring.global_weight),
        ("country_weight", config.scoring.country_weight),
        ("history_weight", config.scoring.history_weight),
        ("confidence_cap", config.scoring.confidence_cap),
    ];
    for (name, value) in weights {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                errors.push(format!("Scoring value '{}' must be a non-negative number, got {}.", name, v));
            }
        }
    }

    if config.history.capacity == Some(0) {
        errors.push("History capacity must be at least 1.".to_string());
    }
    if config.history.preview_chars == Some(0) {
        errors.push("History preview length must be at least 1.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Config validation failed:\n{}", errors.join("\n")))
    }
}
