//! Caller-identity extractor.
//!
//! Authentication happens upstream (the ingress gateway verifies the
//! session and injects the caller's identity as a header); this service
//! only performs authorization. The extractor rejects requests where the
//! header is absent or not a valid UUID.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Header the ingress gateway uses to convey the authenticated caller.
pub const CALLER_ID_HEADER: &str = "x-caller-id";

/// The authenticated caller's identity.
///
/// ```ignore
/// async fn handler(CallerIdentity(identity): CallerIdentity) -> AppResult<Json<()>> {
///     // identity is a verified UUID here
///     Ok(Json(()))
/// }
/// ```
pub struct CallerIdentity(pub Uuid);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(CALLER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized(format!("missing {CALLER_ID_HEADER} header"))
            })?;

        let identity = Uuid::parse_str(raw).map_err(|_| {
            AppError::Unauthorized(format!("{CALLER_ID_HEADER} is not a valid identifier"))
        })?;

        Ok(CallerIdentity(identity))
    }
}
