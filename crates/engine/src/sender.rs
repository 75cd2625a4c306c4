//! Sender resolution: map a sender-type discriminator and identifier to a
//! canonical addressable reference.

use uuid::Uuid;

use outreach_core::error::CoreError;
use outreach_core::types::{SenderKind, SenderReference};

use crate::collaborators::RecordStore;

/// Sender type naming a direct identity.
pub const SENDER_TYPE_USER: &str = "user";

/// Sender type naming a group whose delivery queue is the actual sender.
pub const SENDER_TYPE_GROUP: &str = "group";

/// Resolve `(sender_type, sender_id)` into a [`SenderReference`].
///
/// The type match is case-insensitive. A direct sender never touches the
/// store; a group sender is looked up once and must have an associated
/// delivery queue. Any other type (including an absent one) is invalid
/// input.
pub async fn resolve_sender(
    store: &dyn RecordStore,
    sender_type: Option<&str>,
    sender_id: &str,
) -> Result<SenderReference, CoreError> {
    let id = Uuid::parse_str(sender_id)
        .map_err(|_| CoreError::InvalidInput(format!("sender id '{sender_id}' is not a valid identifier")))?;

    let sender_type = sender_type.unwrap_or("");

    if sender_type.eq_ignore_ascii_case(SENDER_TYPE_USER) {
        return Ok(SenderReference {
            kind: SenderKind::Direct,
            id,
            display_name: None,
        });
    }

    if sender_type.eq_ignore_ascii_case(SENDER_TYPE_GROUP) {
        tracing::debug!(group_id = %id, "Resolving delivery queue for sender group");

        let group = store.retrieve_group(id).await.map_err(|source| {
            CoreError::Configuration {
                message: format!("failed to resolve sender group {id}"),
                source: Some(source),
            }
        })?;

        let queue_id = group.queue_id.ok_or_else(|| {
            CoreError::configuration(format!("sender group {id} has no delivery queue configured"))
        })?;

        tracing::debug!(queue_id = %queue_id, queue_name = ?group.queue_name, "Queue resolved");

        return Ok(SenderReference {
            kind: SenderKind::Queue,
            id: queue_id,
            display_name: group.queue_name,
        });
    }

    Err(CoreError::InvalidInput(format!(
        "unrecognized sender type '{sender_type}'"
    )))
}
