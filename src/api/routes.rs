//! API route configuration.

use crate::api::handlers::{delete_handler, health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST   /shorten`       - Create a short link
/// - `DELETE /delete/{id}`   - Remove a short link
/// - `GET    /health`        - Store health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/delete/{id}", delete(delete_handler))
        .route("/health", get(health_handler))
}
