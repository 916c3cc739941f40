//! Top-level router configuration combining API, page and redirect routes.
//!
//! # Route Structure
//!
//! - `GET    /`              - HTML index page
//! - `POST   /shorten`       - Create a short link
//! - `DELETE /delete/{id}`   - Remove a short link
//! - `GET    /health`        - Store health check
//! - `GET    /{short}`       - Short link redirect
//!
//! Fixed paths take precedence over `/{short}`, and the code generator never
//! hands out a code equal to one of them.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the route table with tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .merge(api::routes::api_routes())
        .route("/{short}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
