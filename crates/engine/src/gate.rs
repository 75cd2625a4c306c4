//! Authorization gate.
//!
//! Runs before the request payload is even interpreted: no capability, no
//! further work of any kind.

use uuid::Uuid;

use outreach_core::error::CoreError;

use crate::collaborators::CapabilityStore;

/// Verify that `identity` holds `capability`.
///
/// A membership query with zero matches fails with
/// [`CoreError::Forbidden`] naming the capability; a faulted lookup is an
/// opaque remote error. The orchestrator must not reach any data-mutating
/// step after a failure here.
pub async fn check_authorized(
    capabilities: &dyn CapabilityStore,
    identity: Uuid,
    capability: &str,
) -> Result<(), CoreError> {
    tracing::debug!(%identity, capability, "Checking caller capability");

    let grants = capabilities
        .count_capability_grants(identity, capability)
        .await
        .map_err(CoreError::Remote)?;

    if grants == 0 {
        tracing::warn!(%identity, capability, "Capability check failed");
        return Err(CoreError::Forbidden(capability.to_string()));
    }

    tracing::debug!(%identity, capability, grants, "Capability confirmed");
    Ok(())
}
