//! Batch dispatcher for the templated-send workflow.
//!
//! Recipients are processed strictly sequentially, and each iteration is a
//! fault-isolation boundary: a failing recipient is logged and tallied as
//! neither sent nor skipped, and the loop moves on. One bad recipient never
//! aborts the batch or corrupts the counts of the others.

use outreach_core::error::RemoteCause;
use outreach_core::types::{DispatchTally, RecipientOutcome, RecipientRecord, SenderReference};

use crate::collaborators::{MessageDelivery, OutboundMessage};

/// Send the template to every recipient, returning the final tally.
///
/// This function is infallible by design: per-recipient faults are
/// recovered here, not propagated.
pub async fn dispatch(
    delivery: &dyn MessageDelivery,
    recipients: &[RecipientRecord],
    template_id: &str,
    sender: &SenderReference,
    recipient_entity_type: &str,
) -> DispatchTally {
    tracing::info!(
        recipients = recipients.len(),
        template_id,
        "Starting templated send"
    );

    let mut tally = DispatchTally::default();

    for recipient in recipients {
        let outcome = match process_recipient(
            delivery,
            recipient,
            template_id,
            sender,
            recipient_entity_type,
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(
                    recipient_id = %recipient.id,
                    error = %error,
                    "Recipient failed, continuing with the batch"
                );
                RecipientOutcome::Failed
            }
        };
        tally.record(outcome);
    }

    tracing::info!(sent = tally.sent, skipped = tally.skipped, "Templated send finished");
    tally
}

/// One iteration of the loop: instantiate, assemble, create, send.
async fn process_recipient(
    delivery: &dyn MessageDelivery,
    recipient: &RecipientRecord,
    template_id: &str,
    sender: &SenderReference,
    recipient_entity_type: &str,
) -> Result<RecipientOutcome, RemoteCause> {
    let Some(contact_id) = recipient.primary_contact_id else {
        return Ok(RecipientOutcome::SkippedNoContact);
    };

    let mut drafts = delivery
        .instantiate_template(template_id, recipient.id, recipient_entity_type)
        .await?;

    // Zero drafts falls through without touching either counter; only the
    // no-contact path above counts as skipped.
    if drafts.is_empty() {
        return Ok(RecipientOutcome::NoDraft);
    }
    let draft = drafts.swap_remove(0);

    let message = OutboundMessage {
        draft,
        to: vec![contact_id],
        from: vec![sender.clone()],
        regarding: recipient.id,
    };

    let message_id = delivery.create_message(&message).await?;
    delivery.send(message_id).await?;

    Ok(RecipientOutcome::Sent)
}
