//! In-memory collaborator fakes for engine tests.
//!
//! Each fake records the calls it receives so tests can assert not just on
//! outcomes but on which external systems were (or were not) touched.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use outreach_core::types::{RecipientRecord, UpdateCommand};
use outreach_engine::collaborators::{
    BlobStore, CapabilityStore, DatasetConfig, DownloadHandle, GroupRecord, MessageDelivery,
    MessageDraft, OutboundMessage, RecordStore, RemoteResult,
};
use outreach_engine::{Engine, EngineConfig};

fn remote_err(msg: &str) -> Box<dyn std::error::Error + Send + Sync> {
    msg.to_string().into()
}

// ---------------------------------------------------------------------------
// Capability store
// ---------------------------------------------------------------------------

pub struct FakeCapabilities {
    pub grants: u64,
    pub queries: AtomicU64,
}

impl FakeCapabilities {
    pub fn granting(grants: u64) -> Self {
        Self {
            grants,
            queries: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl CapabilityStore for FakeCapabilities {
    async fn count_capability_grants(&self, _identity: Uuid, _capability: &str) -> RemoteResult<u64> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.grants)
    }
}

// ---------------------------------------------------------------------------
// Record store
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeStore {
    pub recipients: Vec<RecipientRecord>,
    pub group: Option<GroupRecord>,
    pub dataset_config: Option<DatasetConfig>,
    pub fail_group_lookup: bool,
    /// Names of every store method invoked, in order.
    pub calls: Mutex<Vec<&'static str>>,
    /// Every batch passed to `bulk_update_eligibility`.
    pub applied_updates: Mutex<Vec<Vec<UpdateCommand>>>,
}

impl FakeStore {
    pub fn call_log(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for FakeStore {
    async fn query_eligible_recipients(&self) -> RemoteResult<Vec<RecipientRecord>> {
        self.calls.lock().unwrap().push("query_eligible_recipients");
        Ok(self.recipients.clone())
    }

    async fn retrieve_group(&self, id: Uuid) -> RemoteResult<GroupRecord> {
        self.calls.lock().unwrap().push("retrieve_group");
        if self.fail_group_lookup {
            return Err(remote_err("group lookup timed out"));
        }
        self.group
            .clone()
            .ok_or_else(|| remote_err(&format!("group {id} not found")))
    }

    async fn retrieve_dataset_config(&self, id: Uuid) -> RemoteResult<DatasetConfig> {
        self.calls.lock().unwrap().push("retrieve_dataset_config");
        self.dataset_config
            .clone()
            .ok_or_else(|| remote_err(&format!("configuration record {id} not found")))
    }

    async fn bulk_update_eligibility(&self, commands: &[UpdateCommand]) -> RemoteResult<()> {
        self.calls.lock().unwrap().push("bulk_update_eligibility");
        self.applied_updates.lock().unwrap().push(commands.to_vec());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Blob store
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeBlobs {
    pub data: Vec<u8>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeBlobs {
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BlobStore for FakeBlobs {
    async fn initiate_download(
        &self,
        _record_id: Uuid,
        _attribute: &str,
    ) -> RemoteResult<DownloadHandle> {
        self.calls.lock().unwrap().push("initiate_download");
        Ok(DownloadHandle {
            token: "token-1".to_string(),
            total_size: self.data.len() as u64,
        })
    }

    async fn download_range(
        &self,
        _token: &str,
        offset: u64,
        length: u64,
    ) -> RemoteResult<Vec<u8>> {
        self.calls.lock().unwrap().push("download_range");
        let start = offset as usize;
        let end = (offset + length).min(self.data.len() as u64) as usize;
        Ok(self.data[start..end].to_vec())
    }
}

// ---------------------------------------------------------------------------
// Message delivery
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeDelivery {
    /// Recipients whose template instantiation yields zero drafts.
    pub empty_drafts_for: HashSet<Uuid>,
    /// Recipients whose send call faults.
    pub fail_send_for: HashSet<Uuid>,
    /// Every message handed to `create_message`.
    pub created: Mutex<Vec<OutboundMessage>>,
    /// Every message id handed to `send`.
    pub sent: Mutex<Vec<Uuid>>,
    /// Maps created message ids back to the record they regard.
    regarding_by_message: Mutex<Vec<(Uuid, Uuid)>>,
}

impl FakeDelivery {
    pub fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageDelivery for FakeDelivery {
    async fn instantiate_template(
        &self,
        template_id: &str,
        object_id: Uuid,
        _object_type: &str,
    ) -> RemoteResult<Vec<MessageDraft>> {
        if self.empty_drafts_for.contains(&object_id) {
            return Ok(Vec::new());
        }
        Ok(vec![MessageDraft {
            subject: format!("Subject for {object_id}"),
            body: format!("Body from template {template_id}"),
        }])
    }

    async fn create_message(&self, message: &OutboundMessage) -> RemoteResult<Uuid> {
        let message_id = Uuid::new_v4();
        self.regarding_by_message
            .lock()
            .unwrap()
            .push((message_id, message.regarding));
        self.created.lock().unwrap().push(message.clone());
        Ok(message_id)
    }

    async fn send(&self, message_id: Uuid) -> RemoteResult<()> {
        let regarding = self
            .regarding_by_message
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| *id == message_id)
            .map(|(_, regarding)| *regarding);
        if let Some(record_id) = regarding {
            if self.fail_send_for.contains(&record_id) {
                return Err(remote_err("SMTP relay rejected the message"));
            }
        }
        self.sent.lock().unwrap().push(message_id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Assembly helpers
// ---------------------------------------------------------------------------

pub fn recipient(name: &str, contact: Option<Uuid>) -> RecipientRecord {
    RecipientRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        primary_contact_id: contact,
        eligible: true,
    }
}

pub fn build_engine(
    capabilities: Arc<FakeCapabilities>,
    store: Arc<FakeStore>,
    blobs: Arc<FakeBlobs>,
    delivery: Arc<FakeDelivery>,
) -> Engine {
    Engine::new(capabilities, store, blobs, delivery, EngineConfig::default())
}
