use outreach_engine::config::DEFAULT_REQUIRED_CAPABILITY;

/// Server configuration loaded from environment variables.
///
/// All fields except the gateway URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the record-platform gateway.
    pub gateway_url: String,
    /// Optional service API key sent to the gateway.
    pub gateway_api_key: Option<String>,
    /// Capability the caller must hold to run bulk operations.
    pub required_capability: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `GATEWAY_URL`          | `http://localhost:8080`    |
    /// | `GATEWAY_API_KEY`      | unset                      |
    /// | `REQUIRED_CAPABILITY`  | `bulk-operations-manager`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let gateway_url =
            std::env::var("GATEWAY_URL").unwrap_or_else(|_| "http://localhost:8080".into());

        let gateway_api_key = std::env::var("GATEWAY_API_KEY").ok();

        let required_capability = std::env::var("REQUIRED_CAPABILITY")
            .unwrap_or_else(|_| DEFAULT_REQUIRED_CAPABILITY.into());

        Self {
            host,
            port,
            request_timeout_secs,
            gateway_url,
            gateway_api_key,
            required_capability,
        }
    }
}
