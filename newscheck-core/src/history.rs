// newscheck-core/src/history.rs
//! Bounded, insertion-ordered log of recent verdicts.
//! License: MIT OR APACHE 2.0

use std::collections::VecDeque;

use serde::Serialize;

use crate::config::{DEFAULT_HISTORY_CAPACITY, DEFAULT_PREVIEW_CHARS};
use crate::verdict::{Assessment, Verdict};

/// Marker appended to previews that were cut short.
pub const ELLIPSIS: &str = "...";

/// One past verdict. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    pub display_text: String,
    pub verdict: Verdict,
    pub confidence_display: String,
}

/// Strips surrounding whitespace, including the ASCII separators U+001C..U+001F.
pub fn trim_submission(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Keeps the first `max_chars` characters of `text`, marking the cut with `...`.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct HistoryLog {
    records: VecDeque<HistoryRecord>,
    capacity: usize,
    preview_chars: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY, DEFAULT_PREVIEW_CHARS)
    }
}

impl HistoryLog {
    pub fn new(capacity: usize, preview_chars: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity + 1),
            capacity,
            preview_chars,
        }
    }

    /// Appends a record for `text` and evicts the oldest entries beyond capacity.
    pub fn record(&mut self, text: &str, assessment: &Assessment) -> &HistoryRecord {
        self.records.push_back(HistoryRecord {
            display_text: preview(text, self.preview_chars),
            verdict: assessment.verdict,
            confidence_display: assessment.confidence_display.clone(),
        });
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
        &self.records[self.records.len() - 1]
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Oldest first.
    pub fn snapshot(&self) -> Vec<HistoryRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
