//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short}`
///
/// # Request Flow
///
/// 1. Look up the record by short code
/// 2. Reject it if its expiry has passed (the record is kept)
/// 3. Count the visit
/// 4. Return 302 Found with the original URL in `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired.
/// Returns 503 Service Unavailable if the store cannot be reached in time.
pub async fn redirect_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.url_service.resolve(&short).await.inspect_err(|e| {
        if e.status_code().is_server_error() {
            warn!(short = %short, error = %e, "Redirect lookup failed");
        }
    })?;

    debug!(short = %short, visits = record.visit_count, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, record.original)]))
}
