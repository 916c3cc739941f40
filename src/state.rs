//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;

/// State cloned into each request by axum.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    /// Creates application state around an already constructed service.
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
