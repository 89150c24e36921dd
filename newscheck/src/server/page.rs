// newscheck/src/server/page.rs
//! Renders the single page with `tinytemplate`. All values are HTML-escaped
//! by the template engine's default formatter.

use serde::Serialize;
use tinytemplate::TinyTemplate;

use newscheck_core::{Assessment, HistoryRecord};

const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Debug, Serialize)]
pub struct HistoryItemView {
    pub text: String,
    pub verdict: &'static str,
    pub confidence: String,
    pub css_class: &'static str,
}

/// Everything the page template reads.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub news: String,
    pub has_result: bool,
    pub result: &'static str,
    pub result_class: &'static str,
    pub confidence: String,
    pub has_history: bool,
    pub history: Vec<HistoryItemView>,
    pub history_len: usize,
    pub history_capacity: usize,
}

impl PageView {
    /// The textarea is always rendered empty, as after a submission.
    pub fn new(assessment: Option<&Assessment>, history: &[HistoryRecord], capacity: usize) -> Self {
        let items: Vec<HistoryItemView> = history
            .iter()
            .map(|r| HistoryItemView {
                text: r.display_text.clone(),
                verdict: r.verdict.headline(),
                confidence: r.confidence_display.clone(),
                css_class: r.verdict.history_class(),
            })
            .collect();

        Self {
            news: String::new(),
            has_result: assessment.is_some(),
            result: assessment.map_or("", |a| a.verdict.headline()),
            result_class: assessment.map_or("", |a| a.verdict.result_class()),
            confidence: assessment.map(|a| a.confidence_display.clone()).unwrap_or_default(),
            has_history: !items.is_empty(),
            history_len: items.len(),
            history: items,
            history_capacity: capacity,
        }
    }
}

pub fn render_page(view: &PageView) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("index", PAGE_TEMPLATE)?;
    tt.render("index", view)
}
