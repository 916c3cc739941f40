//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::{Router, routing::get};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /` - Create form and list of every short link
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}
