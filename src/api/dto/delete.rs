//! DTO for the delete endpoint.

use serde::Serialize;

/// Response body for `DELETE /delete/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
