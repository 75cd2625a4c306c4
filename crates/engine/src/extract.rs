//! Dataset extraction: configuration record → attached blob → typed
//! update commands.

use uuid::Uuid;

use outreach_core::dataset;
use outreach_core::error::CoreError;
use outreach_core::types::UpdateCommand;

use crate::collaborators::{BlobStore, RecordStore};

/// Fetch and parse the dataset attached to the named configuration record.
///
/// The download is the platform's two-step protocol: initiate, then read
/// the full reported length at offset 0. Configuration documents are small,
/// so there is no chunking or resume. Bytes are decoded lossily; a stray
/// invalid sequence mangles one cell, it does not fail the batch.
pub async fn extract_update_commands(
    store: &dyn RecordStore,
    blobs: &dyn BlobStore,
    config_record_id: &str,
    file_attribute: &str,
) -> Result<Vec<UpdateCommand>, CoreError> {
    let config_id = Uuid::parse_str(config_record_id).map_err(|_| {
        CoreError::InvalidInput(format!(
            "configuration record id '{config_record_id}' is not a valid identifier"
        ))
    })?;

    let config = store
        .retrieve_dataset_config(config_id)
        .await
        .map_err(CoreError::Remote)?;

    tracing::debug!(
        config_id = %config_id,
        file_name = ?config.file_name,
        "Downloading dataset attachment"
    );

    let handle = blobs
        .initiate_download(config_id, file_attribute)
        .await
        .map_err(CoreError::Remote)?;

    let bytes = blobs
        .download_range(&handle.token, 0, handle.total_size)
        .await
        .map_err(CoreError::Remote)?;

    let text = String::from_utf8_lossy(&bytes);
    let commands = dataset::parse_update_commands(&text);

    tracing::info!(
        config_id = %config_id,
        bytes = bytes.len(),
        commands = commands.len(),
        "Dataset extracted"
    );

    Ok(commands)
}
