//! Common test utilities for dirigo-graph integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dirigo_graph::{DeletePolicy, GraphClient, GraphConfig, GraphCredentials, UserResource};
use dirigo_resource::UserRecord;

/// Tenant ID used by all tests.
pub const TENANT: &str = "test-tenant";

/// Mock Graph server with the token endpoint pre-mounted.
pub struct MockGraphServer {
    server: MockServer,
}

impl MockGraphServer {
    pub async fn new() -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/{TENANT}/oauth2/v2.0/token")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "test-access-token",
                "expires_in": 3599,
                "token_type": "Bearer"
            })))
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount an additional mock on the server.
    pub async fn mount(&self, mock: Mock) {
        mock.mount(&self.server).await;
    }

    /// Build a `UserResource` pointed at this server.
    pub fn resource(&self, delete_policy: DeletePolicy) -> UserResource {
        let config = GraphConfig::builder()
            .tenant_id(TENANT)
            .login_endpoint(self.url())
            .graph_endpoint(self.url())
            .delete_policy(delete_policy)
            .build()
            .expect("valid test config");

        let credentials = GraphCredentials {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string().into(),
        };

        let client = Arc::new(GraphClient::new(&config, credentials).expect("client"));
        UserResource::new(client, config.delete_policy)
    }

    /// All requests the server has received so far.
    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests matching an HTTP method and exact path.
    pub async fn requests_for(&self, http_method: &str, url_path: &str) -> Vec<wiremock::Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| {
                r.method.to_string().eq_ignore_ascii_case(http_method) && r.url.path() == url_path
            })
            .collect()
    }
}

/// Test data factory for a declarative record with all required fields set.
pub fn sample_record() -> UserRecord {
    UserRecord::new("john.doe@test.example", "John Doe", "john.doe", true)
}

/// Graph response body for the user with the given object ID.
pub fn graph_user_json(id: &str) -> Value {
    json!({
        "id": id,
        "userPrincipalName": "john.doe@test.example",
        "displayName": "John Doe",
        "givenName": "John",
        "surname": "Doe",
        "mailNickname": "john.doe",
        "mail": "john.doe@test.example",
        "otherMails": [],
        "accountEnabled": true,
        "companyName": "Test Corp"
    })
}

/// OData error body Graph returns for a missing object.
pub fn odata_not_found() -> Value {
    json!({
        "error": {
            "code": "Request_ResourceNotFound",
            "message": "Resource does not exist or one of its queried reference-property objects are not present."
        }
    })
}

/// OData error body for a throttled/unavailable service.
pub fn odata_service_unavailable() -> Value {
    json!({
        "error": {
            "code": "ServiceUnavailable",
            "message": "The service is temporarily unavailable."
        }
    })
}

/// Decode a captured request body as JSON.
pub fn body_json(request: &wiremock::Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body is JSON")
}
