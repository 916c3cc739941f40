//! Handler for the shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::HeaderMap};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, UrlRecordResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::base_url_from_headers;

/// Creates a short code for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original": "https://example.com/very-long-url",
///   "expireMinutes": 1440   // optional; number, numeric string or null
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "original": "https://example.com/very-long-url",
///   "short": "aZ3kP9qX",
///   "shortUrl": "http://localhost:5000/aZ3kP9qX",
///   "visitCount": 0,
///   "expiresAt": "2026-01-02T12:00:00Z",
///   "createdAt": "2026-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing, empty or invalid, the
/// expiry is out of range, or the body is not valid JSON of this shape. A
/// request without a body is treated as an empty object.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Option<Json<ShortenRequest>>, JsonRejection>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let payload = payload?.map(|Json(p)| p).unwrap_or_default();
    payload.validate()?;

    let original = payload.original.unwrap_or_default();

    let record = state
        .url_service
        .create(&original, payload.expire_minutes)
        .await
        .inspect_err(|e| {
            if e.status_code().is_server_error() {
                tracing::error!(error = %e, "Failed to create short link");
            }
        })?;

    tracing::info!(id = record.id, short = %record.short, "Short link created");

    let base_url = base_url_from_headers(&headers);
    Ok(Json(UrlRecordResponse::from_record(
        record,
        base_url.as_deref(),
    )))
}
