//! Operation-envelope parsing and message-config decoding.
//!
//! The host hands the engine two loosely-typed fields: an operation
//! discriminator and an opaque payload string. This module turns them into a
//! tagged [`Operation`] so nothing past the parse boundary branches on raw
//! strings.

use serde::Deserialize;

use crate::error::CoreError;

/// Discriminator for the send-message operation.
pub const OP_SEND_TEMPLATED_MESSAGE: &str = "SendTemplatedMessage";

/// Discriminator for the bulk-update operation.
pub const OP_BULK_FIELD_UPDATE: &str = "BulkFieldUpdate";

/// A fully parsed bulk operation, ready for the orchestrator to dispatch.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Send a templated notification to every eligible recipient.
    SendTemplatedMessage(MessageConfig),
    /// Apply a bulk eligibility update from the dataset attached to the
    /// named configuration record. The identifier stays a raw string here;
    /// the extractor parses it.
    BulkFieldUpdate { config_record_id: String },
}

/// Configuration for the send-message workflow, decoded from the payload.
///
/// Callers send PascalCase JSON (`TemplateId`, `SenderType`, `SenderId`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageConfig {
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub sender_type: Option<String>,
    #[serde(default)]
    pub sender_id: Option<String>,
}

/// Parse the raw invocation fields into a typed [`Operation`].
///
/// Field presence is checked before any decoding; the discriminator is
/// matched case-sensitively against the two known operations.
pub fn parse_envelope(
    operation_type: Option<&str>,
    payload: Option<&str>,
) -> Result<Operation, CoreError> {
    let operation_type = operation_type.ok_or(CoreError::MissingParameter("operationType"))?;
    let payload = payload.ok_or(CoreError::MissingParameter("payload"))?;

    match operation_type {
        OP_SEND_TEMPLATED_MESSAGE => {
            let config = decode_message_config(payload);
            validate_message_config(&config)?;
            Ok(Operation::SendTemplatedMessage(config))
        }
        OP_BULK_FIELD_UPDATE => Ok(Operation::BulkFieldUpdate {
            config_record_id: payload.to_string(),
        }),
        other => Err(CoreError::UnknownOperation(other.to_string())),
    }
}

/// Decode a send-message payload, degrading instead of erroring.
///
/// Two explicit paths: a strict JSON decode, and on any decode failure a
/// degraded config that treats the whole payload as a bare template id with
/// no sender fields. Downstream validation then rejects genuinely malformed
/// input while tolerating payloads that are just a template identifier.
/// This fallback-then-validate ordering is load-bearing; see
/// [`validate_message_config`].
pub fn decode_message_config(payload: &str) -> MessageConfig {
    match serde_json::from_str::<MessageConfig>(payload) {
        Ok(config) => config,
        Err(_) => MessageConfig {
            template_id: Some(payload.to_string()),
            sender_type: None,
            sender_id: None,
        },
    }
}

/// Require `template_id` and `sender_id` to be present and non-empty.
///
/// `sender_type` is deliberately not required here; an absent or bogus type
/// is the sender resolver's error to raise.
pub fn validate_message_config(config: &MessageConfig) -> Result<(), CoreError> {
    let has_template = config
        .template_id
        .as_deref()
        .is_some_and(|t| !t.is_empty());
    let has_sender = config.sender_id.as_deref().is_some_and(|s| !s.is_empty());

    if !has_template || !has_sender {
        return Err(CoreError::Validation(
            "message config incomplete: TemplateId and SenderId are required".into(),
        ));
    }
    Ok(())
}
