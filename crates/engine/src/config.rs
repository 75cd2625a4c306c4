//! Engine-level settings.

/// Capability required before either bulk operation may run.
pub const DEFAULT_REQUIRED_CAPABILITY: &str = "bulk-operations-manager";

/// Entity type name used when instantiating templates against recipients.
pub const RECIPIENT_ENTITY_TYPE: &str = "account";

/// File attribute on the configuration record that holds the dataset.
pub const DATASET_FILE_ATTRIBUTE: &str = "dataset";

/// Settings the orchestrator reads; defaults mirror the production
/// deployment and can be overridden by the host.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Capability the caller must hold.
    pub required_capability: String,
    /// Entity type passed to template instantiation.
    pub recipient_entity_type: String,
    /// File attribute read by the dataset extractor.
    pub dataset_file_attribute: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            required_capability: DEFAULT_REQUIRED_CAPABILITY.to_string(),
            recipient_entity_type: RECIPIENT_ENTITY_TYPE.to_string(),
            dataset_file_attribute: DATASET_FILE_ATTRIBUTE.to_string(),
        }
    }
}
