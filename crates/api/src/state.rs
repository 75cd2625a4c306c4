use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the engine holds its collaborator handles behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The bulk-operation engine.
    pub engine: outreach_engine::Engine,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
