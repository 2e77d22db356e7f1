//! Microsoft Graph HTTP client.
//!
//! Thin typed wrapper over `reqwest`: bearer-token injection, JSON bodies,
//! and OData error mapping. Each call issues exactly one request; retry and
//! backoff policy belongs to the orchestration host, not this layer.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use dirigo_resource::{ResourceError, ResourceResult};

use crate::auth::TokenCache;
use crate::config::{GraphConfig, GraphCredentials};

/// `OData` error response from Microsoft Graph.
#[derive(Debug, Deserialize)]
pub struct ODataError {
    pub error: ODataErrorBody,
}

/// `OData` error body.
#[derive(Debug, Deserialize)]
pub struct ODataErrorBody {
    pub code: String,
    pub message: String,
}

/// Microsoft Graph API client.
#[derive(Debug)]
pub struct GraphClient {
    http_client: reqwest::Client,
    token_cache: Arc<TokenCache>,
    graph_endpoint: String,
    api_version: String,
}

impl GraphClient {
    /// Creates a new Graph client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &GraphConfig, credentials: GraphCredentials) -> ResourceResult<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ResourceError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            token_cache: Arc::new(TokenCache::new(config, credentials)),
            graph_endpoint: config.graph_endpoint.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Returns the base URL for Graph API requests.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.graph_endpoint, self.api_version)
    }

    /// Performs a GET request and decodes the JSON response.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ResourceResult<T> {
        let response = self.execute(reqwest::Method::GET, url, None::<&()>).await?;
        response.json().await.map_err(ResourceError::from)
    }

    /// Performs a POST request with a JSON body and decodes the response.
    #[instrument(skip(self, body))]
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> ResourceResult<T> {
        let response = self.execute(reqwest::Method::POST, url, Some(body)).await?;
        response.json().await.map_err(ResourceError::from)
    }

    /// Performs a PATCH request with a JSON body. Graph answers 204 No
    /// Content on success, so the body is discarded.
    #[instrument(skip(self, body))]
    pub async fn patch<B: serde::Serialize>(&self, url: &str, body: &B) -> ResourceResult<()> {
        self.execute(reqwest::Method::PATCH, url, Some(body))
            .await?;
        Ok(())
    }

    /// Performs a DELETE request.
    #[instrument(skip(self))]
    pub async fn delete(&self, url: &str) -> ResourceResult<()> {
        self.execute(reqwest::Method::DELETE, url, None::<&()>)
            .await?;
        Ok(())
    }

    /// Issues one request with token injection and maps failure responses.
    async fn execute<B: serde::Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> ResourceResult<reqwest::Response> {
        let token = self.token_cache.get_token().await?;

        debug!("Request {} {}", method, url);
        let mut request = self
            .http_client
            .request(method, url)
            .bearer_auth(&token);

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(api_error(status, &error_body))
    }
}

/// Maps a failure status and body to a `ResourceError`, preserving the
/// OData code and message when the body carries them.
fn api_error(status: reqwest::StatusCode, body: &str) -> ResourceError {
    match serde_json::from_str::<ODataError>(body) {
        Ok(odata) => ResourceError::Api {
            status: status.as_u16(),
            code: odata.error.code,
            message: odata.error.message,
        },
        Err(_) => ResourceError::Api {
            status: status.as_u16(),
            code: status
                .canonical_reason()
                .unwrap_or("UnknownStatus")
                .to_string(),
            message: body.to_string(),
        },
    }
}
