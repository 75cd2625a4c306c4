//! Handler for the `/operations` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::identity::CallerIdentity;
use crate::state::AppState;

/// Inbound bulk-operation request.
///
/// Both fields are optional at the transport level; presence is validated
/// by the engine so that a missing field surfaces as the domain's
/// missing-parameter error rather than a generic deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    pub operation_type: Option<String>,
    pub payload: Option<String>,
}

/// The single-string result envelope.
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    /// Human-readable summary of what the batch did.
    pub output: String,
}

/// POST /api/v1/operations
///
/// Execute one bulk operation for the authenticated caller and return the
/// summary string.
pub async fn execute_operation(
    CallerIdentity(identity): CallerIdentity,
    State(state): State<AppState>,
    Json(request): Json<OperationRequest>,
) -> AppResult<Json<OperationResponse>> {
    let output = state
        .engine
        .execute(
            identity,
            request.operation_type.as_deref(),
            request.payload.as_deref(),
        )
        .await?;

    Ok(Json(OperationResponse { output }))
}
