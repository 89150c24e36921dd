// newscheck-core/src/detector.rs
//! The detector service: classifier, verdict engine and history log in one
//! owned object that the web layer receives by injection.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};
use tokio::sync::Mutex;

use crate::classifier::TextClassifier;
use crate::config::DetectorConfig;
use crate::errors::NewscheckResult;
use crate::history::{trim_submission, HistoryLog, HistoryRecord};
use crate::verdict::{Assessment, VerdictEngine};

/// History shared between request handlers.
pub type SharedHistory = Arc<Mutex<HistoryLog>>;

pub struct NewsDetector {
    classifier: Arc<dyn TextClassifier>,
    engine: VerdictEngine,
    history: SharedHistory,
    capacity: usize,
}

impl std::fmt::Debug for NewsDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsDetector")
            .field("classifier", &"<dyn TextClassifier>")
            .field("engine", &self.engine)
            .finish()
    }
}

impl NewsDetector {
    /// Builds the keyword lexicon from `config` and starts with an empty history.
    pub fn new(classifier: Arc<dyn TextClassifier>, config: &DetectorConfig) -> Result<Self> {
        let lexicon = config.keywords.build_lexicon()?;
        let engine = VerdictEngine::new(lexicon, config.scoring.weights());
        let history = HistoryLog::new(config.history.capacity(), config.history.preview_chars());
        Ok(Self {
            classifier,
            engine,
            capacity: history.capacity(),
            history: Arc::new(Mutex::new(history)),
        })
    }

    pub fn engine(&self) -> &VerdictEngine {
        &self.engine
    }

    /// Classifies one submission.
    ///
    /// Returns `Ok(None)` when the trimmed text is empty, without touching the
    /// history. On classifier failure nothing is recorded and the error is
    /// returned to the caller.
    pub async fn submit(&self, raw: &str) -> NewscheckResult<Option<Assessment>> {
        let text = trim_submission(raw);
        if text.is_empty() {
            debug!("Skipping empty submission.");
            return Ok(None);
        }

        let output = self.classifier.classify(text)?;
        let assessment = self.engine.assess(text, output);

        let mut history = self.history.lock().await;
        history.record(text, &assessment);
        debug!("History now holds {} record(s).", history.len());

        Ok(Some(assessment))
    }

    /// Oldest first.
    pub async fn history(&self) -> Vec<HistoryRecord> {
        self.history.lock().await.snapshot()
    }

    pub fn history_capacity(&self) -> usize {
        self.capacity
    }

    pub async fn clear_history(&self) {
        let mut history = self.history.lock().await;
        let dropped = history.len();
        history.clear();
        info!("Cleared {} history record(s).", dropped);
    }
}
