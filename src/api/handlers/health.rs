//! Handler for health check endpoint.

use std::time::Instant;

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, StoreProbe};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store unreachable or too slow
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "latency_ms": 1 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = probe_store(&state).await;
    let healthy = store.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { store },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn probe_store(state: &AppState) -> StoreProbe {
    let started = Instant::now();
    let result = state.url_service.health_check().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(()) => StoreProbe {
            status: "ok",
            latency_ms,
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, latency_ms, "Store health check failed");
            StoreProbe {
                status: "error",
                latency_ms,
                message: Some(e.to_string()),
            }
        }
    }
}
