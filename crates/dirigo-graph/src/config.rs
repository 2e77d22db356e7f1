//! Configuration for the Graph user resource backend.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use dirigo_resource::{ResourceError, ResourceResult};

/// Default Azure AD login endpoint (commercial cloud).
const DEFAULT_LOGIN_ENDPOINT: &str = "https://login.microsoftonline.com";

/// Default Microsoft Graph endpoint (commercial cloud).
const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.microsoft.com";

/// Default Graph API version.
const DEFAULT_API_VERSION: &str = "v1.0";

/// How delete failures are handled during reconciliation.
///
/// The policy is an explicit configuration choice: best-effort keeps
/// teardown moving past remote flakiness, strict keeps the host's view and
/// the remote state from drifting apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Log and discard delete failures; the record identity is cleared
    /// regardless of the call outcome.
    #[default]
    BestEffort,
    /// Propagate delete failures and keep the record identity, except for
    /// not-found (the object is already gone, which counts as success).
    Strict,
}

/// Client credentials for the OAuth2 client-credentials flow.
#[derive(Debug)]
pub struct GraphCredentials {
    /// Application (client) ID.
    pub client_id: String,
    /// Client secret.
    pub client_secret: SecretString,
}

/// Configuration for the Graph backend.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Directory (tenant) ID.
    pub tenant_id: String,
    /// Login endpoint used for token acquisition.
    pub login_endpoint: String,
    /// Graph API endpoint.
    pub graph_endpoint: String,
    /// Graph API version segment.
    pub api_version: String,
    /// Delete failure handling.
    pub delete_policy: DeletePolicy,
}

impl GraphConfig {
    /// Start building a configuration for the given tenant.
    pub fn builder() -> GraphConfigBuilder {
        GraphConfigBuilder::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ResourceResult<()> {
        if self.tenant_id.is_empty() {
            return Err(ResourceError::config("tenant_id must not be empty"));
        }
        for (name, value) in [
            ("login_endpoint", &self.login_endpoint),
            ("graph_endpoint", &self.graph_endpoint),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ResourceError::config(format!(
                    "{name} must be an absolute http(s) URL, got {value:?}"
                )));
            }
        }
        if self.api_version.is_empty() {
            return Err(ResourceError::config("api_version must not be empty"));
        }
        Ok(())
    }
}

/// Builder for [`GraphConfig`].
#[derive(Debug, Default)]
pub struct GraphConfigBuilder {
    tenant_id: Option<String>,
    login_endpoint: Option<String>,
    graph_endpoint: Option<String>,
    api_version: Option<String>,
    delete_policy: DeletePolicy,
}

impl GraphConfigBuilder {
    /// Set the directory (tenant) ID. Required.
    #[must_use]
    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Override the login endpoint (sovereign clouds, tests).
    #[must_use]
    pub fn login_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.login_endpoint = Some(endpoint.into());
        self
    }

    /// Override the Graph endpoint (sovereign clouds, tests).
    #[must_use]
    pub fn graph_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.graph_endpoint = Some(endpoint.into());
        self
    }

    /// Override the Graph API version.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set the delete failure policy.
    #[must_use]
    pub fn delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> ResourceResult<GraphConfig> {
        let config = GraphConfig {
            tenant_id: self
                .tenant_id
                .ok_or_else(|| ResourceError::config("tenant_id is required"))?,
            login_endpoint: trim_trailing_slash(
                self.login_endpoint
                    .unwrap_or_else(|| DEFAULT_LOGIN_ENDPOINT.to_string()),
            ),
            graph_endpoint: trim_trailing_slash(
                self.graph_endpoint
                    .unwrap_or_else(|| DEFAULT_GRAPH_ENDPOINT.to_string()),
            ),
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            delete_policy: self.delete_policy,
        };
        config.validate()?;
        Ok(config)
    }
}

fn trim_trailing_slash(mut value: String) -> String {
    while value.ends_with('/') {
        value.pop();
    }
    value
}
