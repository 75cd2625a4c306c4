//! Domain types shared by the workflows.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A business record eligible for the send workflow.
///
/// Only the columns the dispatcher needs: identity, display name, the linked
/// primary contact (absent contacts are skipped), and the eligibility flag
/// the store was queried on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientRecord {
    pub id: Uuid,
    pub name: String,
    pub primary_contact_id: Option<Uuid>,
    pub eligible: bool,
}

/// What kind of addressable entity a resolved sender is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderKind {
    /// A direct identity; used as-is, no lookup.
    Direct,
    /// A delivery queue associated with a sender group.
    Queue,
}

/// Canonical addressable "from" party for created messages.
///
/// Immutable once produced by the sender resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderReference {
    pub kind: SenderKind,
    pub id: Uuid,
    pub display_name: Option<String>,
}

/// A typed partial update produced from one dataset row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCommand {
    pub record_id: Uuid,
    pub eligibility: bool,
}

/// Per-recipient result of one dispatch iteration.
///
/// The four arms are tracked asymmetrically on purpose: only
/// `SkippedNoContact` increments the skipped tally, while `NoDraft` and
/// `Failed` fall through without touching either counter. Changing this
/// changes the observable counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientOutcome {
    /// Message created and handed to the delivery subsystem.
    Sent,
    /// Recipient has no linked contact; counted as skipped.
    SkippedNoContact,
    /// Template instantiation produced zero drafts; not counted.
    NoDraft,
    /// A collaborator call faulted for this recipient; not counted.
    Failed,
}

/// Accumulated counts for one dispatch call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchTally {
    pub sent: u32,
    pub skipped: u32,
}

impl DispatchTally {
    /// Fold one per-recipient outcome into the tally.
    pub fn record(&mut self, outcome: RecipientOutcome) {
        match outcome {
            RecipientOutcome::Sent => self.sent += 1,
            RecipientOutcome::SkippedNoContact => self.skipped += 1,
            RecipientOutcome::NoDraft | RecipientOutcome::Failed => {}
        }
    }
}

/// Human-readable summary returned to the caller.
///
/// The single `Output` string is the only structured result the caller sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchSummary {
    /// Send workflow finished.
    Dispatched(DispatchTally),
    /// Update workflow applied this many commands.
    Updated(u32),
    /// Update workflow had nothing to apply; no store call was made.
    NothingToUpdate,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchSummary::Dispatched(tally) => write!(
                f,
                "Done. Sent: {}, skipped: {}.",
                tally.sent, tally.skipped
            ),
            BatchSummary::Updated(count) => {
                write!(f, "{count} records updated successfully.")
            }
            BatchSummary::NothingToUpdate => write!(f, "No rows to update."),
        }
    }
}
