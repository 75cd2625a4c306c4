//! Shared helpers for API integration tests.
//!
//! Builds the full application router around an engine wired to in-memory
//! collaborator stubs, so tests exercise the same middleware stack and
//! error mapping that production uses.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use uuid::Uuid;

use outreach_api::config::ServerConfig;
use outreach_api::routes;
use outreach_api::state::AppState;
use outreach_core::types::{RecipientRecord, UpdateCommand};
use outreach_engine::collaborators::{
    BlobStore, CapabilityStore, DatasetConfig, DownloadHandle, GroupRecord, MessageDelivery,
    MessageDraft, OutboundMessage, RecordStore, RemoteResult,
};
use outreach_engine::{Engine, EngineConfig};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        gateway_url: "http://localhost:0".to_string(),
        gateway_api_key: None,
        required_capability: "bulk-operations-manager".to_string(),
    }
}

/// In-memory collaborator stub backing every seam at once.
#[derive(Default)]
pub struct StubPlatform {
    /// Grant count returned by the capability query.
    pub grants: u64,
    /// Recipients returned by the eligibility query.
    pub recipients: Vec<RecipientRecord>,
    /// Dataset text served by the blob seam.
    pub dataset: Vec<u8>,
    /// Configuration record served for any id.
    pub dataset_config: Option<DatasetConfig>,
    /// Messages created through the delivery seam.
    pub created: Mutex<Vec<OutboundMessage>>,
}

#[async_trait]
impl CapabilityStore for StubPlatform {
    async fn count_capability_grants(&self, _identity: Uuid, _capability: &str) -> RemoteResult<u64> {
        Ok(self.grants)
    }
}

#[async_trait]
impl RecordStore for StubPlatform {
    async fn query_eligible_recipients(&self) -> RemoteResult<Vec<RecipientRecord>> {
        Ok(self.recipients.clone())
    }

    async fn retrieve_group(&self, id: Uuid) -> RemoteResult<GroupRecord> {
        Ok(GroupRecord {
            id,
            queue_id: None,
            queue_name: None,
        })
    }

    async fn retrieve_dataset_config(&self, id: Uuid) -> RemoteResult<DatasetConfig> {
        match &self.dataset_config {
            Some(config) => Ok(config.clone()),
            None => Err(format!("configuration record {id} not found").into()),
        }
    }

    async fn bulk_update_eligibility(&self, _commands: &[UpdateCommand]) -> RemoteResult<()> {
        Ok(())
    }
}

#[async_trait]
impl BlobStore for StubPlatform {
    async fn initiate_download(
        &self,
        _record_id: Uuid,
        _attribute: &str,
    ) -> RemoteResult<DownloadHandle> {
        Ok(DownloadHandle {
            token: "token".to_string(),
            total_size: self.dataset.len() as u64,
        })
    }

    async fn download_range(&self, _token: &str, _offset: u64, _length: u64) -> RemoteResult<Vec<u8>> {
        Ok(self.dataset.clone())
    }
}

#[async_trait]
impl MessageDelivery for StubPlatform {
    async fn instantiate_template(
        &self,
        _template_id: &str,
        object_id: Uuid,
        _object_type: &str,
    ) -> RemoteResult<Vec<MessageDraft>> {
        Ok(vec![MessageDraft {
            subject: format!("Subject {object_id}"),
            body: "Body".to_string(),
        }])
    }

    async fn create_message(&self, message: &OutboundMessage) -> RemoteResult<Uuid> {
        self.created.lock().unwrap().push(message.clone());
        Ok(Uuid::new_v4())
    }

    async fn send(&self, _message_id: Uuid) -> RemoteResult<()> {
        Ok(())
    }
}

/// Build the full application router around the given stub platform.
pub fn build_test_app(platform: Arc<StubPlatform>) -> Router {
    let config = test_config();

    let engine = Engine::new(
        Arc::clone(&platform) as Arc<_>,
        Arc::clone(&platform) as Arc<_>,
        Arc::clone(&platform) as Arc<_>,
        platform,
        EngineConfig::default(),
    );

    let state = AppState {
        engine,
        config: Arc::new(config),
    };

    routes::build_router(state, 30)
}
