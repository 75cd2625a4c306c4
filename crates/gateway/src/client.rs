//! Low-level HTTP plumbing shared by all collaborator implementations.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Header carrying the service API key, when one is configured.
const API_KEY_HEADER: &str = "x-api-key";

/// Errors from the gateway HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("Gateway error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Shared HTTP client for the record-platform gateway.
pub struct RecordGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RecordGateway {
    /// Create a gateway client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://records.internal:8080`,
    ///   without a trailing slash.
    /// * `api_key` - Optional service key sent on every request.
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    /// GET a JSON document.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, GatewayError> {
        let request = self.client.get(format!("{}{path}", self.base_url));
        let response = self.apply_auth(request).send().await?;
        Self::parse_response(response).await
    }

    /// GET a raw byte body.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, GatewayError> {
        let request = self.client.get(format!("{}{path}", self.base_url));
        let response = self.apply_auth(request).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// POST a JSON body and decode a JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let request = self.client.post(format!("{}{path}", self.base_url)).json(body);
        let response = self.apply_auth(request).send().await?;
        Self::parse_response(response).await
    }

    /// POST a JSON body, expecting only a success status back.
    pub(crate) async fn post_ack<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        let request = self.client.post(format!("{}{path}", self.base_url)).json(body);
        let response = self.apply_auth(request).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
