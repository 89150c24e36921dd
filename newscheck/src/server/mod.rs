// newscheck/src/server/mod.rs
//! HTTP front end: one page, one form, one rolling history.
//!
//! Routes:
//! * `GET /` renders the form and the current history.
//! * `POST /` classifies the `news` form field, then renders as above.
//! * `GET /clear_history` empties the history and renders the form.
//! * `GET /static/style.css` serves the stylesheet.

pub mod listener;
pub mod page;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use log::{error, warn};
use serde::Deserialize;
use thiserror::Error;

use newscheck_core::{Assessment, NewsDetector};

pub use listener::bind_with_fallback;
use page::{render_page, PageView};

const STYLESHEET: &str = include_str!("../../assets/style.css");

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    detector: Arc<NewsDetector>,
}

impl AppState {
    pub fn new(detector: NewsDetector) -> Self {
        Self { detector: Arc::new(detector) }
    }

    pub fn detector(&self) -> &NewsDetector {
        &self.detector
    }
}

/// Errors that turn into a 500 page.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to render page: {0}")]
    Render(#[from] tinytemplate::error::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub news: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home).post(submit))
        .route("/clear_history", get(clear_history))
        .route("/static/style.css", get(stylesheet))
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    render(&state, None).await
}

async fn submit(
    State(state): State<AppState>,
    form: Option<Form<SubmitForm>>,
) -> Result<Html<String>, ServerError> {
    let news = form.map(|Form(f)| f.news).unwrap_or_default();

    // A failed classification produces no verdict; the page still renders.
    let assessment = match state.detector.submit(&news).await {
        Ok(assessment) => assessment,
        Err(e) => {
            warn!("Classification failed; dropping submission: {}", e);
            None
        }
    };

    render(&state, assessment.as_ref()).await
}

async fn clear_history(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    state.detector.clear_history().await;
    render(&state, None).await
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn render(state: &AppState, assessment: Option<&Assessment>) -> Result<Html<String>, ServerError> {
    let history = state.detector.history().await;
    let view = PageView::new(assessment, &history, state.detector.history_capacity());
    Ok(Html(render_page(&view)?))
}
