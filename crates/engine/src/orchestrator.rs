//! Top-level orchestration: gate → parse → typed sub-workflow.

use std::sync::Arc;

use uuid::Uuid;

use outreach_core::envelope::{self, MessageConfig, Operation};
use outreach_core::error::CoreError;
use outreach_core::types::BatchSummary;

use crate::collaborators::{BlobStore, CapabilityStore, MessageDelivery, RecordStore};
use crate::config::EngineConfig;
use crate::{dispatch, extract, gate, sender, update};

/// The bulk-operation engine: collaborator handles plus settings.
///
/// Request-scoped state lives entirely on the stack of [`Engine::execute`];
/// the engine itself is shared freely across requests.
#[derive(Clone)]
pub struct Engine {
    capabilities: Arc<dyn CapabilityStore>,
    store: Arc<dyn RecordStore>,
    blobs: Arc<dyn BlobStore>,
    delivery: Arc<dyn MessageDelivery>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(
        capabilities: Arc<dyn CapabilityStore>,
        store: Arc<dyn RecordStore>,
        blobs: Arc<dyn BlobStore>,
        delivery: Arc<dyn MessageDelivery>,
        config: EngineConfig,
    ) -> Self {
        Self {
            capabilities,
            store,
            blobs,
            delivery,
            config,
        }
    }

    /// Execute one bulk operation for an already-authenticated caller.
    ///
    /// Returns the human-readable summary string. Any terminal fault in the
    /// pipeline is logged here, once, with its full cause chain, and then
    /// surfaced unchanged; no partial rollback is attempted.
    pub async fn execute(
        &self,
        identity: Uuid,
        operation_type: Option<&str>,
        payload: Option<&str>,
    ) -> Result<String, CoreError> {
        tracing::info!(%identity, operation_type = ?operation_type, "Bulk operation started");

        let result = self.run(identity, operation_type, payload).await;

        match &result {
            Ok(summary) => {
                tracing::info!(%identity, summary = %summary, "Bulk operation finished")
            }
            Err(error) => {
                tracing::error!(
                    %identity,
                    error = %error,
                    cause = ?std::error::Error::source(error),
                    "Bulk operation failed"
                );
            }
        }

        result.map(|summary| summary.to_string())
    }

    async fn run(
        &self,
        identity: Uuid,
        operation_type: Option<&str>,
        payload: Option<&str>,
    ) -> Result<BatchSummary, CoreError> {
        // Authorization precedes interpretation of the payload.
        gate::check_authorized(
            self.capabilities.as_ref(),
            identity,
            &self.config.required_capability,
        )
        .await?;

        match envelope::parse_envelope(operation_type, payload)? {
            Operation::SendTemplatedMessage(config) => self.run_send(config).await,
            Operation::BulkFieldUpdate { config_record_id } => {
                self.run_update(&config_record_id).await
            }
        }
    }

    async fn run_send(&self, config: MessageConfig) -> Result<BatchSummary, CoreError> {
        // Validated by the envelope parser; both fields are present here.
        let template_id = config.template_id.as_deref().unwrap_or_default();
        let sender_id = config.sender_id.as_deref().unwrap_or_default();

        let sender_ref =
            sender::resolve_sender(self.store.as_ref(), config.sender_type.as_deref(), sender_id)
                .await?;

        let recipients = self
            .store
            .query_eligible_recipients()
            .await
            .map_err(CoreError::Remote)?;

        tracing::info!(recipients = recipients.len(), "Eligible recipients queried");

        let tally = dispatch::dispatch(
            self.delivery.as_ref(),
            &recipients,
            template_id,
            &sender_ref,
            &self.config.recipient_entity_type,
        )
        .await;

        Ok(BatchSummary::Dispatched(tally))
    }

    async fn run_update(&self, config_record_id: &str) -> Result<BatchSummary, CoreError> {
        let commands = extract::extract_update_commands(
            self.store.as_ref(),
            self.blobs.as_ref(),
            config_record_id,
            &self.config.dataset_file_attribute,
        )
        .await?;

        update::apply_updates(self.store.as_ref(), &commands).await
    }
}
