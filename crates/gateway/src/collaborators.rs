//! Collaborator trait implementations over the gateway JSON API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use outreach_core::types::{RecipientRecord, UpdateCommand};
use outreach_engine::collaborators::{
    BlobStore, CapabilityStore, DatasetConfig, DownloadHandle, GroupRecord, MessageDelivery,
    MessageDraft, OutboundMessage, RecordStore, RemoteResult,
};

use crate::client::RecordGateway;

/// Standard `{ "data": T }` envelope used by the gateway API.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct GrantCount {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct GroupDto {
    id: Uuid,
    queue_id: Option<Uuid>,
    queue_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DatasetConfigDto {
    id: Uuid,
    file_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DownloadSessionDto {
    token: String,
    total_size: u64,
}

#[derive(Debug, Deserialize)]
struct DraftDto {
    subject: String,
    body: String,
}

#[derive(Debug, Deserialize)]
struct CreatedMessageDto {
    id: Uuid,
}

#[derive(Debug, Serialize)]
struct InstantiateRequest<'a> {
    template_id: &'a str,
    object_id: Uuid,
    object_type: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateMessageRequest<'a> {
    subject: &'a str,
    body: &'a str,
    to: &'a [Uuid],
    from: Vec<PartyDto<'a>>,
    regarding: Uuid,
}

#[derive(Debug, Serialize)]
struct PartyDto<'a> {
    kind: &'a outreach_core::types::SenderKind,
    id: Uuid,
}

#[async_trait]
impl CapabilityStore for RecordGateway {
    async fn count_capability_grants(&self, identity: Uuid, capability: &str) -> RemoteResult<u64> {
        let counted: Envelope<GrantCount> = self
            .get_json(&format!(
                "/api/v1/identities/{identity}/capability-grants?capability={capability}"
            ))
            .await?;
        Ok(counted.data.count)
    }
}

#[async_trait]
impl RecordStore for RecordGateway {
    async fn query_eligible_recipients(&self) -> RemoteResult<Vec<RecipientRecord>> {
        let records: Envelope<Vec<RecipientRecord>> = self
            .get_json("/api/v1/records/accounts?eligible=true")
            .await?;
        Ok(records.data)
    }

    async fn retrieve_group(&self, id: Uuid) -> RemoteResult<GroupRecord> {
        let group: Envelope<GroupDto> =
            self.get_json(&format!("/api/v1/records/groups/{id}")).await?;
        Ok(GroupRecord {
            id: group.data.id,
            queue_id: group.data.queue_id,
            queue_name: group.data.queue_name,
        })
    }

    async fn retrieve_dataset_config(&self, id: Uuid) -> RemoteResult<DatasetConfig> {
        let config: Envelope<DatasetConfigDto> = self
            .get_json(&format!("/api/v1/records/configurations/{id}"))
            .await?;
        Ok(DatasetConfig {
            id: config.data.id,
            file_name: config.data.file_name,
        })
    }

    async fn bulk_update_eligibility(&self, commands: &[UpdateCommand]) -> RemoteResult<()> {
        self.post_ack("/api/v1/records/accounts/bulk-update", &commands)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl BlobStore for RecordGateway {
    async fn initiate_download(
        &self,
        record_id: Uuid,
        attribute: &str,
    ) -> RemoteResult<DownloadHandle> {
        let session: Envelope<DownloadSessionDto> = self
            .post_json(
                "/api/v1/files/download-sessions",
                &serde_json::json!({ "record_id": record_id, "attribute": attribute }),
            )
            .await?;
        Ok(DownloadHandle {
            token: session.data.token,
            total_size: session.data.total_size,
        })
    }

    async fn download_range(
        &self,
        token: &str,
        offset: u64,
        length: u64,
    ) -> RemoteResult<Vec<u8>> {
        let bytes = self
            .get_bytes(&format!(
                "/api/v1/files/download-sessions/{token}?offset={offset}&length={length}"
            ))
            .await?;
        Ok(bytes)
    }
}

#[async_trait]
impl MessageDelivery for RecordGateway {
    async fn instantiate_template(
        &self,
        template_id: &str,
        object_id: Uuid,
        object_type: &str,
    ) -> RemoteResult<Vec<MessageDraft>> {
        let drafts: Envelope<Vec<DraftDto>> = self
            .post_json(
                "/api/v1/messages/instantiate",
                &InstantiateRequest {
                    template_id,
                    object_id,
                    object_type,
                },
            )
            .await?;
        Ok(drafts
            .data
            .into_iter()
            .map(|draft| MessageDraft {
                subject: draft.subject,
                body: draft.body,
            })
            .collect())
    }

    async fn create_message(&self, message: &OutboundMessage) -> RemoteResult<Uuid> {
        let created: Envelope<CreatedMessageDto> = self
            .post_json(
                "/api/v1/messages",
                &CreateMessageRequest {
                    subject: &message.draft.subject,
                    body: &message.draft.body,
                    to: &message.to,
                    from: message
                        .from
                        .iter()
                        .map(|sender| PartyDto {
                            kind: &sender.kind,
                            id: sender.id,
                        })
                        .collect(),
                    regarding: message.regarding,
                },
            )
            .await?;
        Ok(created.data.id)
    }

    async fn send(&self, message_id: Uuid) -> RemoteResult<()> {
        self.post_ack(
            &format!("/api/v1/messages/{message_id}/send"),
            &serde_json::json!({}),
        )
        .await?;
        Ok(())
    }
}
