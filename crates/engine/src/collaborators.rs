//! Async seams to the external systems the engine orchestrates.
//!
//! The engine never talks to the record platform directly; it goes through
//! these traits. All calls are awaited sequentially (record creation and
//! send are not idempotent, and diagnostic ordering matters), and every
//! fault crossing a seam is an opaque [`RemoteCause`] the workflows wrap
//! into the domain taxonomy.

use async_trait::async_trait;
use uuid::Uuid;

use outreach_core::error::RemoteCause;
use outreach_core::types::{RecipientRecord, SenderReference, UpdateCommand};

/// Result type for collaborator calls.
pub type RemoteResult<T> = Result<T, RemoteCause>;

/// A sender group row, reduced to the columns the resolver reads.
#[derive(Debug, Clone)]
pub struct GroupRecord {
    pub id: Uuid,
    /// The group's associated delivery queue, if one is configured.
    pub queue_id: Option<Uuid>,
    /// Display name of that queue, carried onto the sender reference.
    pub queue_name: Option<String>,
}

/// A configuration record holding an uploaded dataset file.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub id: Uuid,
    /// Name of the attached file, surfaced in diagnostics only.
    pub file_name: Option<String>,
}

/// Handle returned when a blob download is initiated.
#[derive(Debug, Clone)]
pub struct DownloadHandle {
    /// Continuation token for subsequent range reads.
    pub token: String,
    /// Total size of the attachment in bytes.
    pub total_size: u64,
}

/// A message draft produced by instantiating a template against a record.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub subject: String,
    pub body: String,
}

/// A fully assembled outbound message, ready to be created and sent.
///
/// `to` and `from` are single-element collections in practice, but the wire
/// shape allows more parties.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub draft: MessageDraft,
    /// Contact identities to address.
    pub to: Vec<Uuid>,
    /// Resolved sender parties.
    pub from: Vec<SenderReference>,
    /// Back-reference to the record this message is about.
    pub regarding: Uuid,
}

/// Capability-grant membership queries against the identity store.
#[async_trait]
pub trait CapabilityStore: Send + Sync {
    /// Count the capability-grant records linking `identity` to the named
    /// capability. Zero means the identity does not hold it.
    async fn count_capability_grants(
        &self,
        identity: Uuid,
        capability: &str,
    ) -> RemoteResult<u64>;
}

/// Typed queries and updates against the business-record store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records whose eligibility flag is set.
    async fn query_eligible_recipients(&self) -> RemoteResult<Vec<RecipientRecord>>;

    /// Single-record lookup of a sender group.
    async fn retrieve_group(&self, id: Uuid) -> RemoteResult<GroupRecord>;

    /// Single-record lookup of a dataset configuration record.
    async fn retrieve_dataset_config(&self, id: Uuid) -> RemoteResult<DatasetConfig>;

    /// Apply all commands as one multi-record update. Partial-failure
    /// semantics of the batch call are the store's business; a fault here
    /// fails the whole request.
    async fn bulk_update_eligibility(&self, commands: &[UpdateCommand]) -> RemoteResult<()>;
}

/// Two-step download of a file attribute attached to a record.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Begin a download of `attribute` on the given record.
    async fn initiate_download(
        &self,
        record_id: Uuid,
        attribute: &str,
    ) -> RemoteResult<DownloadHandle>;

    /// Read `length` bytes starting at `offset`. Configuration documents
    /// are small, so the extractor reads the full length in one call.
    async fn download_range(&self, token: &str, offset: u64, length: u64)
        -> RemoteResult<Vec<u8>>;
}

/// Template instantiation and message creation/sending.
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Bind a template to a record, producing zero or more drafts.
    async fn instantiate_template(
        &self,
        template_id: &str,
        object_id: Uuid,
        object_type: &str,
    ) -> RemoteResult<Vec<MessageDraft>>;

    /// Create a message record; returns its identifier.
    async fn create_message(&self, message: &OutboundMessage) -> RemoteResult<Uuid>;

    /// Issue the send command for a previously created message.
    async fn send(&self, message_id: Uuid) -> RemoteResult<()>;
}
