//! Index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap};
use chrono::Utc;

use crate::domain::entities::{RecordState, UrlRecord};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::base_url_from_headers;

/// One row of the record list, pre-formatted for display.
pub struct RecordView {
    pub id: i64,
    pub original: String,
    pub short: String,
    pub short_url: String,
    pub visit_count: i64,
    pub expires: String,
    pub expired: bool,
}

impl RecordView {
    fn new(record: UrlRecord, base_url: &str) -> Self {
        let expired = record.state_at(Utc::now()) == RecordState::Expired;
        let expires = record
            .expires_at
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "Never".to_string());

        Self {
            short_url: format!("{}/{}", base_url, record.short),
            id: record.id,
            original: record.original,
            short: record.short,
            visit_count: record.visit_count,
            expires,
            expired,
        }
    }
}

/// Template for the index page.
///
/// Renders `templates/index.html` with the create form and every stored
/// record, newest first.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub records: Vec<RecordView>,
}

/// Renders the index page.
///
/// # Endpoint
///
/// `GET /`
///
/// Short URLs are built from the request's `Host` header so the page links
/// back to whatever address the browser used.
pub async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<IndexTemplate, AppError> {
    let base_url = base_url_from_headers(&headers).unwrap_or_default();

    let records = state.url_service.list().await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to list short links");
    })?;

    Ok(IndexTemplate {
        records: records
            .into_iter()
            .map(|record| RecordView::new(record, &base_url))
            .collect(),
    })
}
