//! Response body of `GET /health`.

use serde::Serialize;

/// Overall service health plus the store probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreProbe,
}

/// Result of one store ping.
#[derive(Debug, Serialize)]
pub struct StoreProbe {
    /// `ok` or `error`.
    pub status: &'static str,
    pub latency_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StoreProbe {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
