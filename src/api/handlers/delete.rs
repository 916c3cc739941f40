//! Handler for the delete endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::delete::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Permanently removes a record.
///
/// # Endpoint
///
/// `DELETE /delete/{id}`
///
/// # Behavior
///
/// - The record is removed from the store; its short code then resolves to 404.
/// - Deleting an id that does not exist also reports success, so retries are safe.
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer.
/// Returns 503 Service Unavailable if the store cannot be reached in time.
pub async fn delete_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = state.url_service.delete(id).await.inspect_err(|e| {
        tracing::error!(id, error = %e, "Failed to delete short link");
    })?;

    if removed {
        tracing::info!(id, "Short link deleted");
    } else {
        tracing::debug!(id, "Delete requested for unknown id");
    }

    Ok(Json(DeleteResponse { success: true }))
}
