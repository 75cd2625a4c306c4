//! Bulk field updater.

use outreach_core::error::CoreError;
use outreach_core::types::{BatchSummary, UpdateCommand};

use crate::collaborators::RecordStore;

/// Apply the commands as one multi-record store update.
///
/// An empty batch short-circuits without a store call. A fault of the
/// batch call fails the whole request; the store's own partial-failure
/// semantics are opaque here.
pub async fn apply_updates(
    store: &dyn RecordStore,
    commands: &[UpdateCommand],
) -> Result<BatchSummary, CoreError> {
    if commands.is_empty() {
        tracing::info!("No update commands extracted, skipping store call");
        return Ok(BatchSummary::NothingToUpdate);
    }

    store
        .bulk_update_eligibility(commands)
        .await
        .map_err(CoreError::Remote)?;

    tracing::info!(updated = commands.len(), "Bulk update applied");
    Ok(BatchSummary::Updated(commands.len() as u32))
}
