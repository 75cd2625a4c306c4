/// Boxed cause preserved from a failed collaborator call.
pub type RemoteCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Domain error taxonomy for the bulk-operation pipeline.
///
/// Every variant except per-recipient faults recovered inside the dispatch
/// loop is terminal for the whole request: it is caught once at the
/// orchestrator boundary, logged, and surfaced to the caller as a single
/// message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The caller lacks the named capability. Raised before any record is
    /// read or written.
    #[error("Access denied: the '{0}' capability is required for this operation")]
    Forbidden(String),

    /// A required request field was absent from the invocation.
    #[error("Required parameter '{0}' is missing")]
    MissingParameter(&'static str),

    /// The operation discriminator did not match any known operation.
    #[error("Unknown operation type '{0}'")]
    UnknownOperation(String),

    /// A decoded payload is structurally present but missing required
    /// sub-fields.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An unrecognized discriminator or malformed identifier supplied by
    /// the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A referenced configuration entity is incomplete (e.g. a sender group
    /// without a delivery queue), or looking it up faulted.
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<RemoteCause>,
    },

    /// An opaque collaborator fault (store, blob, delivery subsystem).
    #[error("Remote call failed: {0}")]
    Remote(#[source] RemoteCause),
}

impl CoreError {
    /// Wrap a collaborator fault as an opaque remote error.
    pub fn remote(cause: impl Into<RemoteCause>) -> Self {
        CoreError::Remote(cause.into())
    }

    /// Build a configuration error with no underlying cause.
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration {
            message: message.into(),
            source: None,
        }
    }
}
